pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "Enter a number:";
pub const DEFAULT_INVALID_NOTICE: &str = "Invalid input, defaulting to 0";
pub const DEFAULT_ECHO_TEMPLATE: &str = "You entered: {value}";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "int-prompt")]
#[command(about = "Read one integer from stdin, falling back to 0 on invalid input")]
pub struct CliConfig {
    /// Path to a TOML file overriding the prompt messages
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
