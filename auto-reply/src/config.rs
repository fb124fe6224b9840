//! Plugin configuration and where it comes from.
//!
//! The host owns the configuration and may change it at any time. The handler asks its
//! [`ConfigSource`] for one [`AutoReplyConfig`] snapshot per event and passes that snapshot
//! down the pipeline, so a single run never observes two versions.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::metadata::PLUGIN_METADATA;

/// Built-in decision template. Placeholders: `{user_message}`, `{is_at}`, `{history}`.
pub const DEFAULT_DECISION_PROMPT: &str = r#"
你是一个名为AstrBot的AI助手的决策核心。你的任务是判断是否应该对用户的消息进行回复。

你需要分析以下信息：
1.  **用户消息**: {user_message}
2.  **是否@机器人**: {is_at}
3.  **历史对话（如果可用）**: {history}

你的决策原则是：
-   **直接提问或指令**: 如果用户明确向机器人提问或发出指令，应该回复。
-   **寻求帮助**: 如果用户表现出需要帮助的意图，应该回复。
-   **闲聊/搭话**: 如果用户只是想闲聊，并且话题有趣或积极，可以考虑回复以增强互动。
-   **无意义或负面内容**: 如果用户消息无意义、含糊不清、是垃圾信息或负面内容，则不应回复。
-   **只是在讨论机器人**: 如果用户只是在第三方视角讨论机器人，而不是直接与机器人互动，通常不需要回复。

请以JSON格式输出你的决策，包含两个字段：
-   `should_reply` (boolean): `true` 表示应该回复, `false` 表示不应回复。
-   `reasoning` (string): 解释你做出这个决策的详细思考过程。

---
用户消息: "{user_message}"
---
你的决策 (JSON格式):
"#;

/// Operator-facing settings. Field names match the host's config keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoReplyConfig {
    /// Master switch; when false the plugin neither logs nor claims anything.
    pub enabled: bool,
    /// Case-insensitive substrings that trigger evaluation of unaddressed messages.
    pub trigger_keywords: Vec<String>,
    /// Decision template, see [`DEFAULT_DECISION_PROMPT`].
    pub decision_making_prompt: String,
}

impl Default for AutoReplyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            trigger_keywords: Vec::new(),
            decision_making_prompt: DEFAULT_DECISION_PROMPT.to_string(),
        }
    }
}

impl AutoReplyConfig {
    /// Parses the host's JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Parse auto-reply config JSON")?;
        Ok(config.normalized())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Read auto-reply config file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Loads from environment variables:
    /// AUTO_REPLY_ENABLED, AUTO_REPLY_TRIGGER_KEYWORDS (comma-separated),
    /// AUTO_REPLY_DECISION_PROMPT_FILE or AUTO_REPLY_DECISION_PROMPT.
    pub fn from_env() -> Result<Self> {
        let enabled = match env::var("AUTO_REPLY_ENABLED") {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("AUTO_REPLY_ENABLED is not a boolean: {}", raw))?,
            Err(_) => true,
        };
        // List syntax only: whitespace around a comma and empty items are not keywords.
        let trigger_keywords: Vec<String> = env::var("AUTO_REPLY_TRIGGER_KEYWORDS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let decision_making_prompt = match env::var("AUTO_REPLY_DECISION_PROMPT_FILE") {
            Ok(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Read AUTO_REPLY_DECISION_PROMPT_FILE {}", path))?,
            Err(_) => env::var("AUTO_REPLY_DECISION_PROMPT").unwrap_or_default(),
        };

        Ok(Self {
            enabled,
            trigger_keywords,
            decision_making_prompt,
        }
        .normalized())
    }

    /// Restores the default template when blank. Keywords are kept exactly as configured;
    /// a blank one matches every message, so it is reported.
    fn normalized(mut self) -> Self {
        if let Some(blank) = self.trigger_keywords.iter().find(|k| k.trim().is_empty()) {
            warn!(
                plugin = PLUGIN_METADATA.name,
                keyword = ?blank,
                "blank trigger keyword matches every message"
            );
        }
        if self.decision_making_prompt.trim().is_empty() {
            self.decision_making_prompt = DEFAULT_DECISION_PROMPT.to_string();
        }
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Supplies a configuration snapshot per event.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn snapshot(&self) -> AutoReplyConfig;
}

/// Fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig(pub AutoReplyConfig);

#[async_trait]
impl ConfigSource for StaticConfig {
    async fn snapshot(&self) -> AutoReplyConfig {
        self.0.clone()
    }
}

/// Hot-reloadable configuration. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<AutoReplyConfig>>,
}

impl SharedConfig {
    pub fn new(config: AutoReplyConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replaces the configuration; runs already holding a snapshot are unaffected.
    pub async fn replace(&self, config: AutoReplyConfig) {
        *self.inner.write().await = config.normalized();
    }

    pub async fn set_enabled(&self, enabled: bool) {
        self.inner.write().await.enabled = enabled;
    }
}

#[async_trait]
impl ConfigSource for SharedConfig {
    async fn snapshot(&self) -> AutoReplyConfig {
        self.inner.read().await.clone()
    }
}
