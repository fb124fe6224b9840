//! Host integration: the auto-reply [`Handler`].

use crate::config::ConfigSource;
use crate::metadata::PLUGIN_METADATA;
use crate::pipeline::DecisionPipeline;
use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::info;

/// Claims triggered group messages (`Stop`) and lets everything else through (`Continue`).
/// Register it after command handlers so commands are never swallowed.
#[derive(Clone)]
pub struct AutoReplyHandler {
    config: Arc<dyn ConfigSource>,
    pipeline: DecisionPipeline,
}

impl AutoReplyHandler {
    pub fn new(config: Arc<dyn ConfigSource>, pipeline: DecisionPipeline) -> Self {
        info!(plugin = PLUGIN_METADATA.name, version = PLUGIN_METADATA.version, "plugin loaded");
        Self { config, pipeline }
    }

    /// Called by the host when the plugin is unloaded.
    pub fn terminate(&self) {
        info!(plugin = PLUGIN_METADATA.name, "plugin unloaded");
    }
}

#[async_trait]
impl Handler for AutoReplyHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_group() {
            return Ok(HandlerResponse::Continue);
        }
        let config = self.config.snapshot().await;
        let outcome = self.pipeline.evaluate(&config, message).await;
        Ok(if outcome.is_claimed() {
            HandlerResponse::Stop
        } else {
            HandlerResponse::Continue
        })
    }
}
