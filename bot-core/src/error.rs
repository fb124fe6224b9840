//! Errors raised by handlers and reply transports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The transport refused or failed to deliver text to a chat.
    #[error("Failed to deliver to chat {chat_id}: {reason}")]
    Delivery { chat_id: i64, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
