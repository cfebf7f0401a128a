pub mod division;
pub mod parser;
pub mod sequence;
pub mod session;

pub use crate::domain::model::{FailureReason, ParseOutcome, RawInput, DEFAULT_VALUE};
pub use crate::domain::ports::{ConfigProvider, LineSource};
pub use crate::utils::error::Result;
