//! LLM: the AI collaborator that turns raw notes into a heading outline.
//!
//! DESIGN
//! ======
//! The editor only sees the [`Enhancer`] trait: raw text in, heading Markdown
//! or an [`LlmError`] out. The production implementation talks to a local
//! Ollama server; tests substitute an in-memory fake.

pub mod config;
pub mod ollama;
pub mod prompt;
pub mod types;

pub use config::OllamaConfig;
pub use ollama::OllamaClient;
pub use types::{Enhancer, LlmError};
