use crate::config::{DEFAULT_ECHO_TEMPLATE, DEFAULT_INVALID_NOTICE, DEFAULT_PROMPT};
use crate::core::session::VALUE_PLACEHOLDER;
use crate::core::ConfigProvider;
use crate::utils::error::{PromptError, Result};
use crate::utils::validation::{
    validate_contains_placeholder, validate_non_empty_string, validate_single_line, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesConfig {
    pub prompt: Option<String>,
    pub invalid_input: Option<String>,
    pub echo: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| PromptError::ConfigReadError {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PromptError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROMPT_TEXT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PromptError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

/// 載入並驗證配置；沒有指定檔案時使用預設訊息
pub fn load_config(path: Option<&Path>) -> Result<TomlConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

impl ConfigProvider for TomlConfig {
    fn prompt(&self) -> &str {
        self.messages.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn invalid_notice(&self) -> &str {
        self.messages
            .invalid_input
            .as_deref()
            .unwrap_or(DEFAULT_INVALID_NOTICE)
    }

    fn echo_template(&self) -> &str {
        self.messages.echo.as_deref().unwrap_or(DEFAULT_ECHO_TEMPLATE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("messages.prompt", self.prompt())?;
        validate_single_line("messages.prompt", self.prompt())?;

        validate_non_empty_string("messages.invalid_input", self.invalid_notice())?;
        validate_single_line("messages.invalid_input", self.invalid_notice())?;

        validate_single_line("messages.echo", self.echo_template())?;
        validate_contains_placeholder("messages.echo", self.echo_template(), VALUE_PLACEHOLDER)?;

        Ok(())
    }
}
