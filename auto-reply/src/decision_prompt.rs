//! Renders the decision template into the prompt sent to the model.

use prompt::{render_template, TemplateError};

/// Value substituted for `{history}`. No history source is wired in yet, so the model always sees this.
pub const HISTORY_PLACEHOLDER: &str = "N/A";

pub struct DecisionPromptBuilder;

impl DecisionPromptBuilder {
    /// Fills `{user_message}`, `{is_at}` (`True`/`False`) and `{history}`.
    /// Any other placeholder in `template` is an error.
    pub fn build(template: &str, user_message: &str, is_at: bool) -> Result<String, TemplateError> {
        let is_at = if is_at { "True" } else { "False" };
        render_template(
            template,
            &[
                ("user_message", user_message),
                ("is_at", is_at),
                ("history", HISTORY_PLACEHOLDER),
            ],
        )
    }
}
