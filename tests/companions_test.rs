use int_prompt::{checked_divide, find_index, parse_or_default, DivisionError, DEFAULT_VALUE};

#[test]
fn test_find_then_divide() {
    let values: Vec<i32> = ["12", "x", "4"]
        .iter()
        .map(|text| parse_or_default(text).value())
        .collect();

    assert_eq!(values, vec![12, DEFAULT_VALUE, 4]);
    assert_eq!(find_index(&values, &DEFAULT_VALUE), Some(1));
    assert_eq!(find_index(&values, &99), None);

    assert_eq!(checked_divide(values[0], values[2]), Ok(3));
    assert_eq!(
        checked_divide(values[0], values[1]),
        Err(DivisionError::DivideByZero)
    );
}
