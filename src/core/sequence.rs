/// 回傳第一個等於 `target` 的元素索引
pub fn find_index<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}
