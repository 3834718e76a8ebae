//! Editor session: glues the document buffer, the canvas engine, and the AI worker.
//!
//! DESIGN
//! ======
//! The session is the single owner of the engine, so every graph mutation
//! happens on whichever task drives the session. Text edits go through the
//! engine's debounce; file loads and AI results render immediately. Every
//! batch of engine actions passes through `observe` so the status line keeps
//! tracking the selection breadcrumb.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use canvas::camera::Rect;
use canvas::consts::NO_SELECTION_TEXT;
use canvas::engine::{Action, EngineCore};
use canvas::layout::GlyphMetrics;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::llm::types::Enhancer;
use crate::services::document::{Document, DocumentError};
use crate::services::enhance::{EnhanceError, EnhanceWorker};

/// Status line while an enhancement is outstanding.
pub const ENHANCING_STATUS: &str = "Enhancing with AI...";

pub struct EditorSession {
    document: Document,
    engine: EngineCore,
    worker: EnhanceWorker,
    /// Last breadcrumb reported by the engine; shown whenever no enhancement is running.
    breadcrumb: String,
}

impl EditorSession {
    #[must_use]
    pub fn new(config: &AppConfig, enhancer: Arc<dyn Enhancer>) -> Self {
        let mut engine = EngineCore::with_settings(config.debounce(), Box::new(GlyphMetrics::default()));
        engine.set_snap_to_grid(config.snap_to_grid);
        Self {
            document: Document::new(),
            engine,
            worker: EnhanceWorker::new(enhancer),
            breadcrumb: NO_SELECTION_TEXT.to_owned(),
        }
    }

    // --- Lifecycle ---

    /// Open `path` if given, otherwise show the tutorial.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if `path` cannot be read.
    pub fn start(&mut self, path: Option<&Path>) -> Result<Vec<Action>, DocumentError> {
        match path {
            Some(path) => self.open(path),
            None => {
                self.document = Document::tutorial();
                Ok(self.render_now())
            }
        }
    }

    /// Clear the buffer and the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsavedChanges`] if the buffer has edits; save
    /// or [`discard_changes`](Self::discard_changes) first.
    pub fn new_file(&mut self) -> Result<Vec<Action>, DocumentError> {
        self.document.ensure_saved()?;
        self.document = Document::new();
        Ok(self.render_now())
    }

    /// Replace the buffer with `path`. On failure the buffer and graph are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsavedChanges`] if the buffer has edits, or
    /// [`DocumentError::Read`] if `path` cannot be read.
    pub fn open(&mut self, path: &Path) -> Result<Vec<Action>, DocumentError> {
        self.document.ensure_saved()?;
        self.document = Document::load(path)?;
        Ok(self.render_now())
    }

    /// Drop unsaved edits so `new_file` or `open` may replace the buffer.
    pub fn discard_changes(&mut self) {
        self.document.discard_changes();
    }

    /// True when the buffer has edits that are not on disk.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.document.is_modified()
    }

    /// # Errors
    ///
    /// See [`Document::save`].
    pub fn save(&mut self) -> Result<(), DocumentError> {
        self.document.save()
    }

    /// # Errors
    ///
    /// See [`Document::save_as`].
    pub fn save_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.document.save_as(path)
    }

    // --- Text ---

    /// The user changed the buffer at `now`. Rendering waits for the debounce.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.document.set_text(text);
        self.engine.note_edit(now);
    }

    /// Drive time-based work: the debounced render.
    pub fn tick(&mut self, now: Instant) -> Vec<Action> {
        let actions = self.engine.render_if_due(now, self.document.text());
        self.observe(&actions);
        actions
    }

    /// Render the buffer immediately, skipping the debounce.
    pub fn render_now(&mut self) -> Vec<Action> {
        let actions = self.engine.render_text(self.document.text());
        self.observe(&actions);
        actions
    }

    // --- Engine ---

    /// Run an engine handler and track the selection it reports.
    pub fn apply(&mut self, handler: impl FnOnce(&mut EngineCore) -> Vec<Action>) -> Vec<Action> {
        let actions = handler(&mut self.engine);
        self.observe(&actions);
        actions
    }

    fn observe(&mut self, actions: &[Action]) {
        for action in actions {
            if let Action::SelectionChanged { breadcrumb, .. } = action {
                self.breadcrumb.clone_from(breadcrumb);
            }
        }
    }

    // --- AI ---

    /// Send the buffer to the AI collaborator in the background.
    ///
    /// # Errors
    ///
    /// [`EnhanceError::InputRequired`] for a blank buffer, [`EnhanceError::Busy`]
    /// while a request is outstanding.
    pub fn enhance(&mut self) -> Result<(), EnhanceError> {
        self.worker.start(self.document.text())
    }

    #[must_use]
    pub fn is_enhancing(&self) -> bool {
        self.worker.is_busy()
    }

    /// Apply a finished enhancement, if one is ready.
    pub fn poll_enhancement(&mut self) -> Option<Result<Vec<Action>, EnhanceError>> {
        let outcome = self.worker.poll()?;
        Some(self.finish_enhancement(outcome))
    }

    /// Wait for the outstanding enhancement and apply it.
    pub async fn wait_enhancement(&mut self) -> Option<Result<Vec<Action>, EnhanceError>> {
        let outcome = self.worker.wait().await?;
        Some(self.finish_enhancement(outcome))
    }

    /// On success the reply replaces the buffer and is rendered at once. On failure nothing changes.
    fn finish_enhancement(&mut self, outcome: Result<String, EnhanceError>) -> Result<Vec<Action>, EnhanceError> {
        let text = outcome?;
        self.document.set_text(text);
        let actions = self.render_now();
        info!(nodes = self.engine.graph.len(), "enhanced document rendered");
        Ok(actions)
    }

    // --- Queries ---

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.document.text()
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.document.title()
    }

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    /// Status line: the selection breadcrumb, or the enhancement notice while one runs.
    #[must_use]
    pub fn status(&self) -> &str {
        if self.worker.is_busy() { ENHANCING_STATUS } else { &self.breadcrumb }
    }

    /// World rectangle to rasterize for export.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyExport`] when nothing is visible.
    pub fn export_bounds(&self) -> Result<Rect, AppError> {
        self.engine.scene().bounds.ok_or(AppError::EmptyExport)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
