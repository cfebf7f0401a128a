use crate::utils::error::DivisionError;

pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32, DivisionError> {
    if divisor == 0 {
        return Err(DivisionError::DivideByZero);
    }
    // i32::MIN / -1
    dividend.checked_div(divisor).ok_or(DivisionError::Overflow)
}
