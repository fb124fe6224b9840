//! The per-message decision pipeline.
//!
//! ```text
//! Disabled | NotTriggered                       (not claimed, nothing logged)
//! Triggered -> claimed -> prompt -> request -> extract -> Replied | Silent
//!                            \---------\----------\------> Aborted
//! ```

use crate::config::AutoReplyConfig;
use crate::decision_prompt::DecisionPromptBuilder;
use crate::dispatch::ReplyDispatcher;
use crate::error::PipelineError;
use crate::extract::{extract_decision, Decision};
use crate::metadata::PLUGIN_METADATA;
use crate::requester::DecisionRequester;
use crate::trigger;
use bot_core::Message;
use llm_client::LlmClient;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Result of one message. Every variant except `Disabled` and `NotTriggered` means the event was claimed.
#[derive(Debug)]
pub enum PipelineOutcome {
    Disabled,
    NotTriggered,
    /// Model said yes and exactly one reply request was dispatched.
    Replied(Decision),
    /// Model said no; nothing dispatched.
    Silent(Decision),
    /// Claimed, then failed; nothing dispatched (or dispatch itself failed).
    Aborted(PipelineError),
}

impl PipelineOutcome {
    /// True when the event was taken away from later handlers.
    pub fn is_claimed(&self) -> bool {
        !matches!(self, PipelineOutcome::Disabled | PipelineOutcome::NotTriggered)
    }

    pub fn decision(&self) -> Option<&Decision> {
        match self {
            PipelineOutcome::Replied(d) | PipelineOutcome::Silent(d) => Some(d),
            _ => None,
        }
    }
}

/// Holds the two outbound collaborators; configuration comes in per call.
#[derive(Clone)]
pub struct DecisionPipeline {
    requester: DecisionRequester,
    dispatcher: Arc<dyn ReplyDispatcher>,
}

impl DecisionPipeline {
    pub fn new(decision_client: Arc<dyn LlmClient>, dispatcher: Arc<dyn ReplyDispatcher>) -> Self {
        Self {
            requester: DecisionRequester::new(decision_client),
            dispatcher,
        }
    }

    /// Runs the whole pipeline for one message against one configuration snapshot.
    pub async fn evaluate(&self, config: &AutoReplyConfig, message: &Message) -> PipelineOutcome {
        if !config.enabled {
            return PipelineOutcome::Disabled;
        }
        if !trigger::should_evaluate(message, &config.trigger_keywords) {
            return PipelineOutcome::NotTriggered;
        }
        let text = message.content.trim();
        info!(
            plugin = PLUGIN_METADATA.name,
            chat_id = message.chat.id,
            message_id = %message.id,
            is_addressed = message.is_addressed,
            keyword = ?trigger::keyword_hit(text, &config.trigger_keywords),
            text = %text,
            "potentially relevant message received, event claimed"
        );
        self.run_claimed(config, message, text).await
    }

    #[instrument(skip_all, fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn run_claimed(
        &self,
        config: &AutoReplyConfig,
        message: &Message,
        text: &str,
    ) -> PipelineOutcome {
        let decision = match self
            .decide(&config.decision_making_prompt, text, message.is_addressed)
            .await
        {
            Ok(decision) => decision,
            Err(e) => {
                log_abort(&e);
                return PipelineOutcome::Aborted(e);
            }
        };

        info!(plugin = PLUGIN_METADATA.name, reasoning = %decision.reasoning, "message analysis");
        info!(
            plugin = PLUGIN_METADATA.name,
            should_reply = decision.should_reply,
            "reply intent: {}",
            if decision.should_reply { "是" } else { "否" }
        );

        if !decision.should_reply {
            info!(plugin = PLUGIN_METADATA.name, "decided not to reply");
            return PipelineOutcome::Silent(decision);
        }

        info!(plugin = PLUGIN_METADATA.name, "decided to reply, requesting generation");
        match self.dispatcher.request_reply(message, text).await {
            Ok(()) => PipelineOutcome::Replied(decision),
            Err(e) => {
                let e = PipelineError::Dispatch(format!("{:#}", e));
                log_abort(&e);
                PipelineOutcome::Aborted(e)
            }
        }
    }

    /// Prompt, request and extract, without gating or dispatch.
    pub async fn decide(
        &self,
        template: &str,
        text: &str,
        is_addressed: bool,
    ) -> Result<Decision, PipelineError> {
        let prompt = DecisionPromptBuilder::build(template, text, is_addressed)?;
        let raw = self.requester.request(&prompt).await?;
        Ok(extract_decision(&raw)?)
    }
}

fn log_abort(e: &PipelineError) {
    match e {
        PipelineError::Extraction(inner) => error!(
            plugin = PLUGIN_METADATA.name,
            error = %e,
            payload = %inner.payload(),
            "failed to parse decision JSON, no reply"
        ),
        _ => error!(
            plugin = PLUGIN_METADATA.name,
            error = %e,
            "decision pipeline aborted, no reply"
        ),
    }
}
