//! # auto-reply
//!
//! Decision layer for group chats. For each group message the [`AutoReplyHandler`]:
//!
//! 1. takes a fresh [`AutoReplyConfig`] snapshot and returns early when disabled,
//! 2. gates on addressing or a trigger keyword ([`trigger`]),
//! 3. claims the event, renders the decision prompt ([`decision_prompt`]),
//! 4. asks the model ([`DecisionRequester`]) and extracts a [`Decision`] ([`extract`]),
//! 5. hands positive decisions to a [`ReplyDispatcher`].
//!
//! Every failure after the claim is logged and ends the run silently; see [`PipelineOutcome`].

pub mod config;
pub mod decision_prompt;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod handler;
pub mod metadata;
pub mod pipeline;
pub mod reply_worker;
pub mod requester;
pub mod trigger;

pub use config::{
    AutoReplyConfig, ConfigSource, SharedConfig, StaticConfig, DEFAULT_DECISION_PROMPT,
};
pub use decision_prompt::{DecisionPromptBuilder, HISTORY_PLACEHOLDER};
pub use dispatch::{QueueReplyDispatcher, ReplyDispatcher, ReplyRequest};
pub use error::PipelineError;
pub use extract::{extract_decision, Decision, ExtractionError, RawDecision, DEFAULT_REASONING};
pub use handler::AutoReplyHandler;
pub use metadata::{PluginMetadata, PLUGIN_METADATA};
pub use pipeline::{DecisionPipeline, PipelineOutcome};
pub use reply_worker::ReplyWorker;
pub use requester::DecisionRequester;
