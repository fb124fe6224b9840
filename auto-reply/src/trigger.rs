//! Trigger gate: should a message be evaluated at all?
//!
//! Pure predicates. The `enabled` switch is checked by the caller before any of these run.

use bot_core::Message;

/// Returns the first keyword contained in `text`, compared case-insensitively.
/// Keywords are used as given: surrounding spaces must appear in `text`, and an empty keyword
/// matches everything.
pub fn keyword_hit<'k>(text: &str, keywords: &'k [String]) -> Option<&'k str> {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .map(String::as_str)
        .find(|k| lowered.contains(&k.to_lowercase()))
}

/// True when the message is addressed to the bot or its trimmed text contains a trigger keyword.
pub fn should_evaluate(message: &Message, keywords: &[String]) -> bool {
    message.is_addressed || keyword_hit(message.content.trim(), keywords).is_some()
}
