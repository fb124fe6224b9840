//! Sends the rendered decision prompt to the model.

use crate::error::PipelineError;
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct DecisionRequester {
    llm_client: Arc<dyn LlmClient>,
}

impl DecisionRequester {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Returns the raw completion. A transport error or a blank completion is [`PipelineError::Provider`]. Not retried.
    pub async fn request(&self, prompt: &str) -> Result<String, PipelineError> {
        let completion = self
            .llm_client
            .get_llm_response_with_messages(vec![ChatMessage::user(prompt)])
            .await
            .map_err(|e| PipelineError::Provider(format!("{:#}", e)))?;

        if completion.trim().is_empty() {
            return Err(PipelineError::Provider(
                "model returned no usable content".to_string(),
            ));
        }
        debug!(completion_len = completion.len(), "decision completion received");
        Ok(completion)
    }
}
