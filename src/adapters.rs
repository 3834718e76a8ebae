//! Text render adapters used by the launcher.
//!
//! Neither draws pixels. [`JsonAdapter`] serializes each scene snapshot and
//! [`OutlineAdapter`] prints the visible forest as an indented list.

use std::fmt::Write as _;

use canvas::render::{RenderAdapter, Scene};
use tracing::warn;

// =============================================================================
// JSON
// =============================================================================

/// Holds the JSON of the most recent frame. Earlier frames are dropped.
#[derive(Debug, Default)]
pub struct JsonAdapter {
    pretty: bool,
    latest: Option<String>,
    drawn: usize,
}

impl JsonAdapter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty, latest: None, drawn: 0 }
    }

    /// Number of frames encoded so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Most recent frame, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// Encode one scene.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `scene` cannot be encoded.
    pub fn encode(scene: &Scene, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty { serde_json::to_string_pretty(scene) } else { serde_json::to_string(scene) }
    }
}

impl RenderAdapter for JsonAdapter {
    fn draw(&mut self, scene: &Scene) {
        match Self::encode(scene, self.pretty) {
            Ok(json) => {
                self.latest = Some(json);
                self.drawn += 1;
            }
            Err(e) => warn!(error = %e, nodes = scene.nodes.len(), "scene serialization failed; frame skipped"),
        }
    }
}

// =============================================================================
// OUTLINE
// =============================================================================

/// Marker appended to collapsed nodes.
pub const COLLAPSED_MARKER: &str = " [+]";

/// Renders the visible nodes in document order, two spaces per level.
#[derive(Debug, Default)]
pub struct OutlineAdapter {
    text: String,
}

impl OutlineAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent frame.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RenderAdapter for OutlineAdapter {
    fn draw(&mut self, scene: &Scene) {
        let mut nodes: Vec<_> = scene.nodes.iter().collect();
        nodes.sort_by_key(|n| n.source_line);

        self.text.clear();
        for node in nodes {
            let indent = "  ".repeat(node.level);
            let marker = if node.collapsed { COLLAPSED_MARKER } else { "" };
            let _ = writeln!(self.text, "{indent}- {}{marker}", node.title);
        }
    }
}

#[cfg(test)]
#[path = "adapters_test.rs"]
mod tests;
