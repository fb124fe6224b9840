//! Pulls a [`Decision`] out of free-form model text.
//!
//! Models often wrap JSON in Markdown fences. The payload is located in this order:
//!
//! 1. text after the first "```json" up to the next "```" (or the end),
//! 2. otherwise text after the first "```" up to the next "```" (or the end),
//! 3. otherwise the whole text.
//!
//! Parsing ([`parse_decision`]) is strict and only checks that the payload is a JSON object.
//! Defaults for missing fields are applied afterwards by [`RawDecision::into_decision`].

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Reasoning used when the model gives none.
pub const DEFAULT_REASONING: &str = "无思考过程。";

/// Whether to reply, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub should_reply: bool,
    pub reasoning: String,
}

/// The two decision fields exactly as the model sent them, before defaulting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDecision {
    pub should_reply: Option<Value>,
    pub reasoning: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("decision payload is not valid JSON: {source}")]
    Malformed {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("decision payload is JSON {kind}, expected an object")]
    NotAnObject { payload: String, kind: &'static str },
}

impl ExtractionError {
    /// The substring that failed to parse.
    pub fn payload(&self) -> &str {
        match self {
            ExtractionError::Malformed { payload, .. } => payload,
            ExtractionError::NotAnObject { payload, .. } => payload,
        }
    }
}

/// Returns the slice of `raw` that should hold the decision JSON.
pub fn locate_payload(raw: &str) -> &str {
    if let Some((_, after)) = raw.split_once(JSON_FENCE) {
        return up_to_fence(after).trim();
    }
    if let Some((_, after)) = raw.split_once(FENCE) {
        return up_to_fence(after).trim();
    }
    raw
}

fn up_to_fence(s: &str) -> &str {
    s.split_once(FENCE).map(|(body, _)| body).unwrap_or(s)
}

/// Parses `payload` as a JSON object and picks out the decision fields.
pub fn parse_decision(payload: &str) -> Result<RawDecision, ExtractionError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|source| ExtractionError::Malformed {
            payload: payload.to_string(),
            source,
        })?;
    let mut object: Map<String, Value> = match value {
        Value::Object(object) => object,
        other => {
            return Err(ExtractionError::NotAnObject {
                payload: payload.to_string(),
                kind: json_kind(&other),
            })
        }
    };
    Ok(RawDecision {
        should_reply: object.remove("should_reply"),
        reasoning: object.remove("reasoning"),
    })
}

/// Locates, parses and defaults in one step.
pub fn extract_decision(raw: &str) -> Result<Decision, ExtractionError> {
    parse_decision(locate_payload(raw)).map(RawDecision::into_decision)
}

impl RawDecision {
    /// Applies defaults: absent or null `should_reply` is false, absent or null `reasoning` is [`DEFAULT_REASONING`].
    ///
    /// `should_reply` also accepts the strings "true"/"yes"/"1" and non-zero numbers.
    /// This is stricter than truthiness: "no", "false" and non-empty arrays are all false.
    /// Non-string reasoning is kept as its JSON text.
    pub fn into_decision(self) -> Decision {
        let should_reply = match self.should_reply {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1")
            }
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        };
        let reasoning = match self.reasoning {
            None | Some(Value::Null) => DEFAULT_REASONING.to_string(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Decision {
            should_reply,
            reasoning,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
