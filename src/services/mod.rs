//! Application services used by the editor session and the launcher.
//!
//! ARCHITECTURE
//! ============
//! Services own I/O: the document file round-trip and the background AI
//! call. The canvas core never performs I/O; the session hands it text.

pub mod document;
pub mod enhance;
