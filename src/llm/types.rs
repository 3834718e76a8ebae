//! LLM types: chat messages, the enhancement trait, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the AI collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// Nothing is listening at the configured Ollama address.
    #[error("could not connect to Ollama at {url}, ensure the service is running")]
    Unreachable { url: String },

    /// The HTTP request failed after the connection was made.
    #[error("AI request failed: {0}")]
    ApiRequest(String),

    /// Ollama returned a non-success HTTP status.
    #[error("AI response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not the expected chat shape.
    #[error("received an invalid response from the AI model: {0}")]
    ApiParse(String),

    /// The model answered with nothing usable.
    #[error("the AI model returned an empty reply")]
    EmptyReply,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Whether trying the same request again later could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::Unreachable { .. } | Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// One chat turn in Ollama's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".into(), content: content.into() }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

// =============================================================================
// ENHANCER TRAIT
// =============================================================================

/// Turns raw notes into a heading document. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Enhancer: Send + Sync {
    /// Restructure `raw_text` into `#`-heading Markdown.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the service is unreachable, the request fails,
    /// or the reply is malformed or empty.
    async fn enhance(&self, raw_text: &str) -> Result<String, LlmError>;

    /// Model name, for logs.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
