use crate::domain::model::RawInput;
use crate::utils::error::Result;

/// 每次呼叫取得一行輸入
pub trait LineSource {
    fn read_line(&mut self) -> Result<RawInput>;
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn invalid_notice(&self) -> &str;
    fn echo_template(&self) -> &str;
}
