//! Ollama connection settings parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "qwen3:8b";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    pub timeouts: LlmTimeouts,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeouts: LlmTimeouts {
                request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl OllamaConfig {
    /// Build config from `lookup`, which maps a variable name to its value.
    ///
    /// Optional:
    /// - `MINDMAP_OLLAMA_URL`: default `http://127.0.0.1:11434`
    /// - `MINDMAP_MODEL`: default `qwen3:8b`
    /// - `MINDMAP_REQUEST_TIMEOUT_SECS`: default 120
    /// - `MINDMAP_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] when the URL is not http(s).
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let base_url = lookup("MINDMAP_OLLAMA_URL")
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(LlmError::ConfigParse(format!("MINDMAP_OLLAMA_URL must be http(s): {base_url}")));
        }

        let model = lookup("MINDMAP_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let timeouts = LlmTimeouts {
            request_secs: parse_u64(lookup, "MINDMAP_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup, "MINDMAP_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, model, timeouts })
    }
}

/// Parse a numeric setting, falling back to `default` when absent or malformed.
pub(crate) fn parse_u64(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
