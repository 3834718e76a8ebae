//! Layout engine: converts parsed heading records into a positioned forest.
//!
//! Positions use a level-indexed slot scheme. Column `x` is a pure function
//! of the heading level; row `y` centres each level's records around zero,
//! which needs the per-level totals before any node is placed. Layout is
//! therefore two passes over the records: count, then place.
//!
//! A record whose parent level has no node yet (a heading that skips more
//! than one level) is dropped. It still consumes its slot on its own level,
//! so the rows of later siblings do not shift.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use tracing::debug;

use crate::camera::Point;
use crate::consts::{HORIZONTAL_SPACING, NODE_MIN_HEIGHT, NODE_PADDING, NODE_WIDTH, VERTICAL_SPACING};
use crate::graph::{Graph, Node, NodeId, SelectionChanged};
use crate::outline::HeadingRecord;

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Height of a title once wrapped to a given width. Supplied by the render adapter.
pub trait TextMeasure {
    fn wrapped_height(&self, text: &str, max_width: f64) -> f64;
}

/// Fixed-advance text metrics with greedy word wrap.
///
/// Used headless and in tests; a real adapter measures with its font.
#[derive(Debug, Clone, Copy)]
pub struct GlyphMetrics {
    /// Horizontal advance of one character.
    pub advance: f64,
    /// Height of one wrapped line.
    pub line_height: f64,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self { advance: 7.0, line_height: 17.0 }
    }
}

impl GlyphMetrics {
    /// Number of lines `text` occupies when wrapped at `max_chars` characters.
    #[must_use]
    pub fn line_count(text: &str, max_chars: usize) -> usize {
        let max_chars = max_chars.max(1);
        let mut lines = 1;
        let mut current = 0;

        for word in text.split_whitespace() {
            let len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= max_chars {
                current = needed;
                continue;
            }
            if current > 0 {
                lines += 1;
            }
            // Over-long words break by character.
            let chunks = len.div_ceil(max_chars);
            lines += chunks - 1;
            current = len - (chunks - 1) * max_chars;
        }
        lines
    }
}

impl TextMeasure for GlyphMetrics {
    fn wrapped_height(&self, text: &str, max_width: f64) -> f64 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_chars = (max_width / self.advance).floor().max(1.0) as usize;
        #[allow(clippy::cast_precision_loss)]
        let lines = Self::line_count(text, max_chars) as f64;
        lines * self.line_height
    }
}

/// Box height for a title: wrapped text plus padding, never below the minimum.
#[must_use]
pub fn node_height(title: &str, measure: &dyn TextMeasure) -> f64 {
    let text_height = measure.wrapped_height(title, NODE_WIDTH - NODE_PADDING);
    (text_height + NODE_PADDING).max(NODE_MIN_HEIGHT)
}

// =============================================================================
// SLOTS
// =============================================================================

/// Top-left corner for the `index`-th of `count` nodes on `level`.
#[must_use]
pub fn slot_position(level: usize, index: usize, count: usize) -> Point {
    #[allow(clippy::cast_precision_loss)]
    let (level, index, count) = (level as f64, index as f64, count.max(1) as f64);
    Point::new(level * HORIZONTAL_SPACING, (index - (count - 1.0) / 2.0) * VERTICAL_SPACING)
}

/// Result of a full layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// The selection cleared by replacing the previous forest.
    pub selection: SelectionChanged,
    /// Nodes created.
    pub placed: usize,
    /// Records dropped for lack of a parent.
    pub dropped: usize,
}

/// Replace the forest in `graph` with one built from `records`.
pub fn layout(records: &[HeadingRecord], graph: &mut Graph, measure: &dyn TextMeasure) -> LayoutOutcome {
    let selection = graph.clear();

    let depth = records.iter().map(|r| r.level + 1).max().unwrap_or(0);
    let mut counts = vec![0_usize; depth];
    for record in records {
        counts[record.level] += 1;
    }

    let mut next_index = vec![0_usize; depth];
    let mut current: Vec<Option<NodeId>> = vec![None; depth];
    let mut placed = 0;
    let mut dropped = 0;

    for record in records {
        let level = record.level;
        let index = next_index[level];
        next_index[level] += 1;

        let parent = if level == 0 {
            None
        } else {
            match current[level - 1] {
                Some(parent) => Some(parent),
                None => {
                    dropped += 1;
                    continue;
                }
            }
        };

        let position = slot_position(level, index, counts[level]);
        let node = Node::new(record.title.as_str(), level, record.source_line, position, node_height(&record.title, measure));
        if let Some(id) = graph.add_node(node, parent) {
            current[level] = Some(id);
            placed += 1;
        }
    }

    debug!(records = records.len(), placed, dropped, "layout rebuilt");
    LayoutOutcome { selection, placed, dropped }
}
