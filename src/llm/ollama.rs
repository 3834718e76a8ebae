//! Ollama chat client.
//!
//! Posts a single non-streaming request to `/api/chat` and returns the
//! assistant's `message.content`. Request building and response parsing are
//! free functions so the wire format is testable without a server.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::config::OllamaConfig;
use super::prompt::SYSTEM_PROMPT;
use super::types::{ChatMessage, Enhancer, LlmError};

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &OllamaConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), model: config.model.clone() })
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(url).json(body).send().await.map_err(|e| {
            if e.is_connect() {
                LlmError::Unreachable { url: self.base_url.clone() }
            } else {
                LlmError::ApiRequest(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Enhancer for OllamaClient {
    async fn enhance(&self, raw_text: &str) -> Result<String, LlmError> {
        let messages = build_messages(raw_text);
        let body = ChatRequest { model: &self.model, messages: &messages, stream: false };
        debug!(model = %self.model, input_len = raw_text.len(), "ollama: sending chat request");
        let text = self.send_json("/api/chat", &body).await?;
        let content = parse_chat_response(&text)?;
        info!(model = %self.model, output_len = content.len(), "ollama: reply received");
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub stream: bool,
}

/// System prompt followed by the user's raw text.
pub(crate) fn build_messages(raw_text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(raw_text)]
}

/// Extract the assistant reply from a `/api/chat` response body.
///
/// A leading `<think>...</think>` block, emitted by reasoning models, is dropped.
pub(crate) fn parse_chat_response(json_text: &str) -> Result<String, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let Some(content) = root
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
    else {
        return Err(LlmError::ApiParse("missing message.content".to_owned()));
    };

    let reply = strip_reasoning(content).trim();
    if reply.is_empty() {
        return Err(LlmError::EmptyReply);
    }
    Ok(reply.to_owned())
}

fn strip_reasoning(content: &str) -> &str {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("<think>") {
        return content;
    }
    match trimmed.find("</think>") {
        Some(end) => &trimmed[end + "</think>".len()..],
        None => content,
    }
}

#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;
