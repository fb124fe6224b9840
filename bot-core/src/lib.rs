//! # bot-core
//!
//! Core types and traits shared by the host and its plugins: [`Message`], [`Handler`],
//! [`HandlerResponse`], the [`Bot`] reply transport, addressing helpers in [`mention`], and
//! tracing initialization. Transport-agnostic; used by handler-chain and auto-reply.

pub mod bot;
pub mod error;
pub mod logger;
pub mod mention;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::{init_tracing, DEFAULT_LOG_FILTER};
pub use mention::{is_addressed, is_bot_mentioned, starts_with_wake_word};
pub use types::{Chat, ChatKind, Handler, HandlerResponse, Message, MessageDirection, User};
