//! Pure functions deciding whether a message is addressed to the bot.
//!
//! The host adapter calls [`is_addressed`] once per inbound message and stores the result in
//! [`crate::Message::is_addressed`]; plugins only read the flag.

/// Returns true if `text` contains a @mention of the given bot username.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_username: &str) -> bool {
    text.contains(&format!("@{}", bot_username))
}

/// Returns true if the trimmed `text` starts with one of `wake_words` (case-insensitive). Blank wake words never match.
pub fn starts_with_wake_word<S: AsRef<str>>(text: &str, wake_words: &[S]) -> bool {
    let lowered = text.trim_start().to_lowercase();
    wake_words.iter().any(|w| {
        let w = w.as_ref().trim();
        !w.is_empty() && lowered.starts_with(&w.to_lowercase())
    })
}

/// A message is addressed when it @-mentions the bot or opens with a wake word.
pub fn is_addressed<S: AsRef<str>>(
    text: &str,
    bot_username: Option<&str>,
    wake_words: &[S],
) -> bool {
    if let Some(username) = bot_username {
        if is_bot_mentioned(text, username) {
            return true;
        }
    }
    starts_with_wake_word(text, wake_words)
}
