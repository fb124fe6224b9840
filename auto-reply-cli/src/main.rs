//! auto-reply CLI: console chat, one-off decision, offline extraction. Config from env and optional CLI args.

use anyhow::Result;
use auto_reply_cli::{app, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file =
        std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/auto-reply.log".to_string());
    bot_core::init_tracing(&log_file, bot_core::DEFAULT_LOG_FILTER)?;

    let config = app::load_plugin_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chat {
            bot_name,
            wake_words,
        } => app::run_chat(config, bot_name, wake_words).await,
        Commands::Decide { text, addressed } => app::run_decide(config, &text, addressed).await,
        Commands::Extract => app::run_extract().await,
    }
}
