//! Connection settings for OpenAI-compatible endpoints.

use anyhow::{bail, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Where completions go and which models serve them.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    /// Model for generated replies.
    fn model(&self) -> &str;
    /// Model for reply-or-not decisions. Falls back to [`LlmConfig::model`].
    fn decision_model(&self) -> &str {
        self.model()
    }
    fn system_prompt(&self) -> Option<&str>;
}

#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub decision_model: Option<String>,
    pub system_prompt: Option<String>,
}

impl EnvLlmConfig {
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_BASE_URL`, `MODEL`, `DECISION_MODEL` and
    /// `LLM_SYSTEM_PROMPT` (`SYSTEM_PROMPT` as fallback). Blank values count as unset.
    pub fn from_env() -> Result<Self> {
        let Some(api_key) = non_blank("OPENAI_API_KEY") else {
            bail!("OPENAI_API_KEY not set");
        };
        Ok(Self {
            api_key,
            base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_blank("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            decision_model: non_blank("DECISION_MODEL"),
            system_prompt: non_blank("LLM_SYSTEM_PROMPT").or_else(|| non_blank("SYSTEM_PROMPT")),
        })
    }
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn decision_model(&self) -> &str {
        self.decision_model.as_deref().unwrap_or(&self.model)
    }

    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}
