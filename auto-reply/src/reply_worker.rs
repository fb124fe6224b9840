//! Consumer side of [`crate::QueueReplyDispatcher`]: generates replies and delivers them.

use crate::dispatch::ReplyRequest;
use bot_core::Bot;
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, instrument};

/// Generates a reply with an [`LlmClient`] and sends it through a [`Bot`].
#[derive(Clone)]
pub struct ReplyWorker {
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
}

impl ReplyWorker {
    pub fn new(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn Bot>) -> Self {
        Self { llm_client, bot }
    }

    /// Handles one request. A blank completion is an error and nothing is sent.
    #[instrument(
        skip(self, request),
        fields(chat_id = request.message.chat.id, message_id = %request.message.id)
    )]
    pub async fn process(&self, request: &ReplyRequest) -> anyhow::Result<()> {
        let reply = self
            .llm_client
            .get_llm_response_with_messages(vec![ChatMessage::user(request.prompt.clone())])
            .await?;
        let reply = reply.trim();
        if reply.is_empty() {
            anyhow::bail!("reply model returned no content");
        }
        self.bot.reply_to(&request.message, reply).await?;
        info!(reply_len = reply.len(), "reply sent");
        Ok(())
    }

    /// Drains `receiver` until every sender is dropped. Failures are logged per request.
    pub async fn run(self, mut receiver: UnboundedReceiver<ReplyRequest>) {
        while let Some(request) = receiver.recv().await {
            if let Err(e) = self.process(&request).await {
                let cause = format!("{:#}", e);
                error!(
                    chat_id = request.message.chat.id,
                    message_id = %request.message.id,
                    error = %cause,
                    "reply generation failed"
                );
            }
        }
        info!("reply queue closed, worker exiting");
    }
}
