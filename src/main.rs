use clap::Parser;
use int_prompt::utils::logger;
use int_prompt::{load_config, CliConfig, PromptSession, ReaderSource};

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    // 載入並驗證訊息配置
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let stdout = std::io::stdout();
    let mut session = PromptSession::new(ReaderSource::stdin(), stdout.lock(), config);

    match session.run() {
        Ok(value) => {
            tracing::info!("Read value {}", value);
        }
        Err(e) => {
            tracing::error!("Prompt failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
