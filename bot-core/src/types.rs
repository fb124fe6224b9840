//! Message model shared by the host and its plugins, plus the [`Handler`] contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn new(id: i64, username: Option<&str>) -> Self {
        Self {
            id,
            username: username.map(str::to_string),
            first_name: None,
            last_name: None,
        }
    }
}

/// Kind of conversation. Serialized in lowercase, e.g. `"supergroup"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

impl Chat {
    pub fn new(id: i64, kind: ChatKind) -> Self {
        Self { id, kind }
    }

    pub fn group(id: i64) -> Self {
        Self::new(id, ChatKind::Group)
    }

    /// Group and supergroup chats; private chats and channels are not.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ChatKind::Group | ChatKind::Supergroup)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
    /// Set by the host adapter when the message @-mentions the bot or opens with a wake word.
    pub is_addressed: bool,
}

impl Message {
    /// An unaddressed incoming message stamped with the current time.
    pub fn incoming(
        id: impl Into<String>,
        user: User,
        chat: Chat,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
            is_addressed: false,
        }
    }

    pub fn addressed(mut self, is_addressed: bool) -> Self {
        self.is_addressed = is_addressed;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// What a handler did with a message. `Stop` and `Reply` claim it: no later handler sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    Continue,
    Stop,
    /// Not interested; same effect as `Continue`.
    Ignore,
    Reply(String),
}

impl HandlerResponse {
    pub fn is_claimed(&self) -> bool {
        matches!(self, HandlerResponse::Stop | HandlerResponse::Reply(_))
    }
}

/// A unit in the host's handler chain.
///
/// The chain calls every `before`, then `handle` in registration order until one claims the
/// message, then every `after` in reverse order.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Return false to drop the message before any `handle` runs.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
