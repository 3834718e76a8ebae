//! Document service: the text buffer and its byte-for-byte file round-trip.
//!
//! The buffer is the only persisted state. The graph is always regenerated
//! from it, so loading or saving never touches the canvas.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

pub const UNTITLED: &str = "New File";
const TITLE_PREFIX: &str = "Mind Map Editor - ";

/// Shown when the editor starts without a file.
pub const TUTORIAL: &str = "\
# Mind Map Tutorial And A Really Long Title To Test Wrapping
## Getting Started
### Create nodes with Markdown headings. More hashes make a deeper node.
### Pan by dragging the background with the right or middle button. Use Ctrl + Mouse Wheel to zoom.
## Features
### Auto-rendering
### Collapse branches with the toggle on a node's right edge
### Search highlights matching nodes
### AI Enhancement
#### Structure raw text from notes, documents, or anything you paste.
#### Turn meeting notes into a map of topics and action items.
## Tips
### Double-click a node to change its colour
### Markdown Syntax";

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to load {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to save {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("document has no file path; use save as")]
    NoPath,
    #[error("{title} has unsaved changes; save or discard them first")]
    UnsavedChanges { title: String },
}

/// The editor's text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    /// Empty, untitled, unmodified buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Untitled buffer holding the tutorial.
    #[must_use]
    pub fn tutorial() -> Self {
        Self { text: TUTORIAL.to_owned(), path: None, modified: false }
    }

    /// Read `path` into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the file cannot be read as UTF-8.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read { path: path.to_owned(), source })?;
        info!(path = %path.display(), bytes = text.len(), "document loaded");
        Ok(Self { text, path: Some(path.to_owned()), modified: false })
    }

    /// Write the buffer back to its own path.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NoPath`] for an untitled buffer, or
    /// [`DocumentError::Write`] if the write fails.
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::NoPath)?;
        self.save_as(&path)
    }

    /// Write the buffer to `path` and adopt it as the document's path.
    ///
    /// On failure the buffer, its path and its modified flag are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Write`] if the write fails.
    pub fn save_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, &self.text).map_err(|source| DocumentError::Write { path: path.to_owned(), source })?;
        info!(path = %path.display(), bytes = self.text.len(), "document saved");
        self.path = Some(path.to_owned());
        self.modified = false;
        Ok(())
    }

    /// Replace the buffer contents. Marks the document modified when the text changes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.modified = true;
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Forget pending edits so the buffer may be replaced. The text itself is kept.
    pub fn discard_changes(&mut self) {
        if self.modified {
            info!(title = %self.title(), "unsaved changes discarded");
        }
        self.modified = false;
    }

    /// # Errors
    ///
    /// Returns [`DocumentError::UnsavedChanges`] while the buffer is modified.
    pub fn ensure_saved(&self) -> Result<(), DocumentError> {
        if self.modified { Err(DocumentError::UnsavedChanges { title: self.title() }) } else { Ok(()) }
    }

    /// Window title: `Mind Map Editor - <path>` or `Mind Map Editor - New File`.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => format!("{TITLE_PREFIX}{}", path.display()),
            None => format!("{TITLE_PREFIX}{UNTITLED}"),
        }
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
