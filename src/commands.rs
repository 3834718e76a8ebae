//! Launcher subcommands. Each one drives an [`EditorSession`] headlessly.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use canvas::engine::Action;
use canvas::render::RenderAdapter;
use tracing::{debug, info, warn};

use crate::adapters::{JsonAdapter, OutlineAdapter};
use crate::error::AppError;
use crate::services::enhance::EnhanceError;
use crate::session::EditorSession;

// =============================================================================
// RENDER / OUTLINE
// =============================================================================

/// View adjustments applied after the initial layout.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Highlight nodes whose title contains this text.
    pub search: Option<String>,
    /// Collapse every node with one of these titles.
    pub collapse: Vec<String>,
    pub snap: bool,
}

/// Open `file` (or the tutorial) and apply `options`.
///
/// # Errors
///
/// Returns [`AppError::Document`] if `file` cannot be read.
pub fn prepare(session: &mut EditorSession, file: Option<&Path>, options: &ViewOptions) -> Result<(), AppError> {
    session.start(file)?;
    session.apply(|engine| {
        engine.set_snap_to_grid(options.snap);
        Vec::new()
    });

    for title in &options.collapse {
        let ids: Vec<_> = session
            .engine()
            .graph
            .nodes()
            .filter(|n| n.title == *title && n.has_children() && !n.collapsed)
            .map(|n| n.id)
            .collect();
        if ids.is_empty() {
            warn!(%title, "no expandable node with that title");
        }
        for id in ids {
            session.apply(|engine| engine.toggle_collapse(&id));
        }
    }

    if let Some(query) = &options.search {
        let actions = session.apply(|engine| engine.search(query));
        if let Some(Action::SearchApplied { matches }) = actions.first() {
            info!(%query, matches = matches.len(), "search applied");
        }
    }
    Ok(())
}

/// Scene snapshot as pretty JSON.
///
/// # Errors
///
/// Returns [`AppError::Serialize`] if the scene cannot be encoded.
pub fn render_json(session: &EditorSession) -> Result<String, AppError> {
    Ok(JsonAdapter::encode(&session.engine().scene(), true)?)
}

/// Visible forest as an indented outline.
#[must_use]
pub fn render_outline(session: &EditorSession) -> String {
    let mut adapter = OutlineAdapter::new();
    adapter.draw(&session.engine().scene());
    adapter.text().to_owned()
}

// =============================================================================
// ENHANCE
// =============================================================================

/// Restructure `file` with the AI collaborator and return the new text.
/// With `write`, the result is also saved back to `file`.
///
/// # Errors
///
/// Document errors on read/write, [`AppError::Enhance`] when the collaborator fails.
pub async fn enhance(session: &mut EditorSession, file: &Path, write: bool) -> Result<String, AppError> {
    session.open(file)?;
    session.enhance()?;
    session.wait_enhancement().await.ok_or(EnhanceError::WorkerDropped)??;

    info!(nodes = session.engine().graph.len(), path = %file.display(), "document enhanced");
    if write {
        session.save()?;
    }
    Ok(session.text().to_owned())
}

// =============================================================================
// WATCH
// =============================================================================

/// Re-renders a file through the debounce whenever its contents change.
pub struct Watcher<A: RenderAdapter> {
    session: EditorSession,
    path: PathBuf,
    adapter: A,
}

impl<A: RenderAdapter> Watcher<A> {
    /// # Errors
    ///
    /// Returns [`AppError::Document`] if `path` cannot be read initially.
    pub fn new(mut session: EditorSession, path: PathBuf, mut adapter: A) -> Result<Self, AppError> {
        session.open(&path)?;
        adapter.draw(&session.engine().scene());
        Ok(Self { session, path, adapter })
    }

    #[must_use]
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Feed the latest disk contents (if readable) at `now`. Returns true when a frame was drawn.
    pub fn step(&mut self, disk_text: Option<String>, now: Instant) -> bool {
        if let Some(text) = disk_text {
            if text != self.session.text() {
                debug!(path = %self.path.display(), "change detected");
                self.session.edit(text, now);
            }
        }

        let actions = self.session.tick(now);
        let rendered = actions.iter().any(|a| matches!(a, Action::Rendered { .. }));
        if rendered {
            self.adapter.draw(&self.session.engine().scene());
        }
        rendered
    }

    /// Poll the file every `interval` until Ctrl-C, calling `on_frame` after each redraw.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the Ctrl-C handler cannot be installed.
    pub async fn run(mut self, interval: Duration, mut on_frame: impl FnMut(&A)) -> Result<(), AppError> {
        on_frame(&self.adapter);
        let mut ticker = tokio::time::interval(interval);
        info!(path = %self.path.display(), ?interval, "watching");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let disk_text = match tokio::fs::read_to_string(&self.path).await {
                        Ok(text) => Some(text),
                        Err(e) => {
                            warn!(error = %e, path = %self.path.display(), "read failed; keeping last render");
                            None
                        }
                    };
                    if self.step(disk_text, Instant::now()) {
                        on_frame(&self.adapter);
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    signal?;
                    info!("watch stopped");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
