//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "auto-reply")]
#[command(about = "LLM-decided auto replies for group chats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Plugin config JSON (enabled, trigger_keywords, decision_making_prompt). Defaults to AUTO_REPLY_* env vars.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a group chat: every stdin line is one message.
    Chat {
        /// Bot username; lines containing @NAME are addressed.
        #[arg(short, long, default_value = "bot")]
        bot_name: String,
        /// Wake words; lines starting with one are addressed. Repeatable.
        #[arg(short, long = "wake")]
        wake_words: Vec<String>,
    },
    /// Ask the model for a single decision and print it as JSON. Never dispatches a reply.
    Decide {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        addressed: bool,
    },
    /// Parse model output from stdin into a decision (no network).
    Extract,
}
