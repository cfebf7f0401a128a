pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::reader::ReaderSource;
pub use config::toml_config::{load_config, TomlConfig};
pub use crate::core::{
    division::checked_divide, parser::parse_or_default, sequence::find_index,
    session::PromptSession, ParseOutcome, DEFAULT_VALUE,
};
pub use utils::error::{DivisionError, PromptError, Result};
