//! Top-level application error.

use crate::llm::types::LlmError;
use crate::services::document::DocumentError;
use crate::services::enhance::EnhanceError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Enhance(#[from] EnhanceError),
    #[error("Cannot export an empty mind map")]
    EmptyExport,
    #[error("scene serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
