//! Test doubles shared by the auto-reply integration tests. No network.

#![allow(dead_code)]

use async_trait::async_trait;
use auto_reply::ReplyDispatcher;
use bot_core::{Bot, BotError, Chat, ChatKind, Message, Result as BotResult, User};
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Mutex;

/// Scripted LLM: returns `reply` (or fails when `None`) and records every prompt.
pub struct MockLlmClient {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        let prompt = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => anyhow::bail!("connection refused"),
        }
    }
}

/// Records reply requests; optionally fails them.
#[derive(Default)]
pub struct RecordingDispatcher {
    pub requests: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }
}

#[async_trait]
impl ReplyDispatcher for RecordingDispatcher {
    async fn request_reply(&self, message: &Message, prompt: &str) -> anyhow::Result<()> {
        self.requests
            .lock()
            .unwrap()
            .push((message.id.clone(), prompt.to_string()));
        if self.fail {
            anyhow::bail!("reply system unavailable");
        }
        Ok(())
    }
}

/// Records sent texts per chat id; optionally refuses delivery.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub refuse: bool,
}

impl RecordingBot {
    pub fn refusing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            refuse: true,
        }
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> BotResult<()> {
        if self.refuse {
            return Err(BotError::Delivery {
                chat_id: chat.id,
                reason: "bot was kicked from the group".to_string(),
            });
        }
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

pub fn make_message(content: &str, is_addressed: bool) -> Message {
    make_message_in(content, is_addressed, ChatKind::Group)
}

pub fn make_message_in(content: &str, is_addressed: bool, kind: ChatKind) -> Message {
    Message::incoming("msg_1", User::new(123, Some("user")), Chat::new(456, kind), content)
        .addressed(is_addressed)
}

pub fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
