//! Hand-off from a positive decision to the reply path.
//!
//! Dispatch is fire-and-forget: the dispatcher only records that a reply should be generated.
//! Generation, delivery and conversation memory belong to whoever consumes the request.

use async_trait::async_trait;
use bot_core::Message;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// One reply to generate: the message being answered and the prompt for the reply model.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub message: Message,
    pub prompt: String,
}

/// Downstream "generate a reply" request. Called at most once per message.
#[async_trait]
pub trait ReplyDispatcher: Send + Sync {
    async fn request_reply(&self, message: &Message, prompt: &str) -> anyhow::Result<()>;
}

/// Queues [`ReplyRequest`]s for a [`crate::ReplyWorker`] (or any other consumer).
#[derive(Clone)]
pub struct QueueReplyDispatcher {
    sender: UnboundedSender<ReplyRequest>,
}

impl QueueReplyDispatcher {
    pub fn new(sender: UnboundedSender<ReplyRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl ReplyDispatcher for QueueReplyDispatcher {
    async fn request_reply(&self, message: &Message, prompt: &str) -> anyhow::Result<()> {
        self.sender
            .send(ReplyRequest {
                message: message.clone(),
                prompt: prompt.to_string(),
            })
            .map_err(|e| anyhow::anyhow!("Failed to queue reply request: {}", e))?;
        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "reply request queued"
        );
        Ok(())
    }
}
