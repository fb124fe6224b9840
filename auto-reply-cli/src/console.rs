//! Console stand-ins for the host: a stdout [`Bot`] and a command handler that runs before the plugin.

use async_trait::async_trait;
use auto_reply::SharedConfig;
use bot_core::{is_addressed, Bot, Chat, Handler, HandlerResponse, Message, Result, User};
use std::io::Write;
use std::sync::Arc;

/// Chat id used for the simulated group.
pub const CONSOLE_CHAT_ID: i64 = 1;

const HELP: &str = "Type a message. @-mention the bot or use a wake word to address it. \
                    /auto on|off toggles auto-reply.";

/// Prints outgoing text to stdout.
pub struct StdoutBot;

#[async_trait]
impl Bot for StdoutBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        writeln!(std::io::stdout().lock(), "[chat {}] bot> {}", chat.id, text)?;
        Ok(())
    }
}

/// Host commands. Registered first so the plugin never swallows them.
/// `/auto on|off` flips the plugin switch live through the shared config.
pub struct ConsoleCommandHandler {
    bot: Arc<dyn Bot>,
    config: SharedConfig,
}

impl ConsoleCommandHandler {
    pub fn new(bot: Arc<dyn Bot>, config: SharedConfig) -> Self {
        Self { bot, config }
    }
}

#[async_trait]
impl Handler for ConsoleCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match message.content.trim() {
            "/ping" => "pong",
            "/help" => HELP,
            "/auto on" => {
                self.config.set_enabled(true).await;
                "auto-reply enabled"
            }
            "/auto off" => {
                self.config.set_enabled(false).await;
                "auto-reply disabled"
            }
            _ => return Ok(HandlerResponse::Continue),
        };
        self.bot.reply_to(message, reply).await?;
        Ok(HandlerResponse::Stop)
    }
}

/// Builds the group message for one console line.
pub fn console_message(seq: u64, line: &str, bot_name: &str, wake_words: &[String]) -> Message {
    Message::incoming(
        seq.to_string(),
        User::new(0, Some("console")),
        Chat::group(CONSOLE_CHAT_ID),
        line,
    )
    .addressed(is_addressed(line, Some(bot_name), wake_words))
}
