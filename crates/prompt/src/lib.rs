//! # Prompt
//!
//! Building blocks for text sent to AI models.
//!
//! - [`ChatMessage`] / [`MessageRole`]: one element of an OpenAI-style `messages` array.
//! - [`render_template`]: fills `{name}` placeholders in an operator-supplied template.
//!
//! ## Template syntax
//!
//! - `{name}` is replaced by the value bound to `name`. Every placeholder must be bound.
//! - `{{` and `}}` produce literal braces.
//! - A `{` without a closing `}` and a lone `}` are errors.
//!
//! Unbound values are allowed (a template may ignore some of them).
//!
//! ## External interactions
//!
//! - **AI models**: rendered output is sent to LLM APIs through `llm-client`.

use thiserror::Error;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Template rendering failure. Positions are byte offsets into the template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template references unknown placeholder `{{{0}}}`")]
    UnknownKey(String),

    #[error("unclosed `{{` at byte {0}")]
    UnclosedBrace(usize),

    #[error("single `}}` encountered at byte {0}")]
    StrayClosingBrace(usize),
}

/// Renders `template`, replacing each `{key}` with its value from `values`.
///
/// Returns [`TemplateError::UnknownKey`] when the template names a key that `values` does not
/// bind. Key text is taken verbatim between the braces; format specs are not interpreted.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let brace = &rest[idx..];
        let at = offset + idx;

        if brace.starts_with("{{") {
            out.push('{');
            rest = &brace[2..];
            offset = at + 2;
        } else if brace.starts_with("}}") {
            out.push('}');
            rest = &brace[2..];
            offset = at + 2;
        } else if brace.starts_with('}') {
            return Err(TemplateError::StrayClosingBrace(at));
        } else {
            let close = brace.find('}').ok_or(TemplateError::UnclosedBrace(at))?;
            let key = &brace[1..close];
            if key.contains('{') {
                return Err(TemplateError::UnclosedBrace(at));
            }
            let value = values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .ok_or_else(|| TemplateError::UnknownKey(key.to_string()))?;
            out.push_str(value);
            rest = &brace[close + 1..];
            offset = at + close + 1;
        }
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors_set_role() {
        assert_eq!(ChatMessage::system("s").role, MessageRole::System);
        assert_eq!(ChatMessage::user("u").role, MessageRole::User);
        assert_eq!(ChatMessage::assistant("a").role, MessageRole::Assistant);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(
            TemplateError::UnknownKey("mood".to_string()).to_string(),
            "template references unknown placeholder `{mood}`"
        );
        assert_eq!(
            TemplateError::StrayClosingBrace(3).to_string(),
            "single `}` encountered at byte 3"
        );
    }
}
