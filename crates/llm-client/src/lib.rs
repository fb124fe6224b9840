//! # LLM client abstraction
//!
//! The auto-reply pipeline talks to models only through [`LlmClient`], so tests swap in a
//! scripted client. [`OpenAILlmClient`] is the production implementation and
//! [`EnvLlmConfig`] wires it from the environment.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai_llm::OpenAILlmClient;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's reply text for `messages`. Implementations may prepend their own
    /// system message.
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}
