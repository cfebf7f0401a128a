use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PromptError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PromptError::IoError(e) => format!("Could not read from input: {}", e),
            PromptError::ConfigReadError { path, source } => {
                format!("The configuration file '{}' could not be read: {}", path, source)
            }
            PromptError::ConfigError { message } => {
                format!("The configuration file could not be loaded: {}", message)
            }
            PromptError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// 依錯誤種類決定行程退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::IoError(_) => 1,
            PromptError::ConfigReadError { .. }
            | PromptError::ConfigError { .. }
            | PromptError::InvalidConfigValueError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Division overflows a 32-bit signed integer")]
    Overflow,
}
