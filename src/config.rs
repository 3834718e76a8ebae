//! Application configuration from the environment (and `.env`).

use std::time::Duration;

use canvas::consts::RENDER_DEBOUNCE_MS;

use crate::llm::config::{OllamaConfig, parse_u64};
use crate::llm::types::LlmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub llm: OllamaConfig,
    /// Quiet period before edited text is re-laid out.
    pub debounce_ms: u64,
    /// Round dragged nodes to the grid.
    pub snap_to_grid: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { llm: OllamaConfig::default(), debounce_ms: RENDER_DEBOUNCE_MS, snap_to_grid: false }
    }
}

impl AppConfig {
    /// Read the process environment, letting `overrides` (command-line values) win.
    /// Call after `dotenvy::dotenv()`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env(overrides: &[(&str, Option<String>)]) -> Result<Self, LlmError> {
        Self::from_lookup(&|key| {
            overrides
                .iter()
                .find(|(name, value)| *name == key && value.is_some())
                .and_then(|(_, value)| value.clone())
                .or_else(|| std::env::var(key).ok())
        })
    }

    /// Build config from `lookup`, which maps a variable name to its value.
    ///
    /// Optional, besides the Ollama settings:
    /// - `MINDMAP_DEBOUNCE_MS`: default 750
    /// - `MINDMAP_SNAP_TO_GRID`: `true`/`false`/`1`/`0`, default false
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] for a malformed boolean or Ollama URL.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let llm = OllamaConfig::from_lookup(lookup)?;
        let debounce_ms = parse_u64(lookup, "MINDMAP_DEBOUNCE_MS", RENDER_DEBOUNCE_MS);
        let snap_to_grid = parse_bool(lookup("MINDMAP_SNAP_TO_GRID").as_deref(), "MINDMAP_SNAP_TO_GRID")?;
        Ok(Self { llm, debounce_ms, snap_to_grid })
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_bool(raw: Option<&str>, key: &str) -> Result<bool, LlmError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "false" | "0") => Ok(false),
        Some("true" | "1") => Ok(true),
        Some(other) => Err(LlmError::ConfigParse(format!("{key} must be true/false/1/0, got '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
