//! Errors that end a claimed pipeline run.

use crate::extract::ExtractionError;
use prompt::TemplateError;
use thiserror::Error;

/// Why a claimed run stopped without a reply. Never surfaced to chat users; only logged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decision template could not be rendered: {0}")]
    Template(#[from] TemplateError),

    #[error("decision request failed: {0}")]
    Provider(String),

    #[error("decision could not be extracted: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("reply request could not be dispatched: {0}")]
    Dispatch(String),
}
