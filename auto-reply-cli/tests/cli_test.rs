//! Tests for argument parsing, config selection and the console host pieces. No network.

use async_trait::async_trait;
use auto_reply::{AutoReplyConfig, ConfigSource, SharedConfig};
use auto_reply_cli::app::load_plugin_config;
use auto_reply_cli::console::{console_message, ConsoleCommandHandler, CONSOLE_CHAT_ID};
use auto_reply_cli::{Cli, Commands};
use bot_core::{Bot, Chat, Handler, HandlerResponse, Result as BotResult};
use clap::Parser;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> BotResult<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// **Test: chat subcommand takes bot name and repeatable wake words.**
#[test]
fn parse_chat_args() {
    let cli = Cli::try_parse_from([
        "auto-reply", "chat", "-b", "helper", "-w", "小助手", "-w", "hey bot",
    ])
    .unwrap();
    match cli.command {
        Commands::Chat { bot_name, wake_words } => {
            assert_eq!(bot_name, "helper");
            assert_eq!(wake_words, vec!["小助手".to_string(), "hey bot".to_string()]);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(cli.config.is_none());
}

/// **Test: decide requires --text; --config is global.**
#[test]
fn parse_decide_args() {
    assert!(Cli::try_parse_from(["auto-reply", "decide"]).is_err());

    let cli = Cli::try_parse_from([
        "auto-reply",
        "decide",
        "--text",
        "在吗",
        "--addressed",
        "--config",
        "c.json",
    ])
    .unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("c.json")));
    match cli.command {
        Commands::Decide { text, addressed } => {
            assert_eq!(text, "在吗");
            assert!(addressed);
        }
        other => panic!("unexpected {:?}", other),
    }
}

/// **Test: A missing --config file is reported instead of falling back to env.**
#[test]
fn load_config_missing_file_fails() {
    let missing = std::path::Path::new("/nonexistent/auto_reply.json");
    assert!(load_plugin_config(Some(missing)).is_err());
}

/// **Test: Console lines are group messages; addressing follows @name and wake words.**
#[test]
fn console_message_addressing() {
    let wake = vec!["小助手".to_string()];
    let mentioned = console_message(1, "@helper 在吗", "helper", &wake);
    assert!(mentioned.is_addressed);
    assert!(mentioned.chat.is_group());
    assert_eq!(mentioned.chat.id, CONSOLE_CHAT_ID);
    assert_eq!(mentioned.id, "1");

    assert!(console_message(2, "小助手 帮个忙", "helper", &wake).is_addressed);
    assert!(!console_message(3, "大家好", "helper", &wake).is_addressed);
}

/// **Test: /auto off claims the command and disables the plugin; unknown text passes through.**
#[tokio::test]
async fn command_handler_toggles_plugin() {
    let bot = Arc::new(RecordingBot::default());
    let shared = SharedConfig::new(AutoReplyConfig::default());
    let handler = ConsoleCommandHandler::new(bot.clone(), shared.clone());

    let response = handler.handle(&console_message(1, "/auto off", "bot", &[])).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    assert!(!shared.snapshot().await.enabled);
    assert_eq!(*bot.sent.lock().unwrap(), vec!["auto-reply disabled".to_string()]);

    let response = handler.handle(&console_message(2, "hello", "bot", &[])).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
