//! Shared numeric constants for the canvas crate.

// ── Layout ──────────────────────────────────────────────────────

/// Horizontal distance between heading levels, in world units.
pub const HORIZONTAL_SPACING: f64 = 300.0;

/// Vertical distance between neighbouring slots on one level, in world units.
pub const VERTICAL_SPACING: f64 = 100.0;

/// Fixed node width in world units.
pub const NODE_WIDTH: f64 = 200.0;

/// Minimum node height; taller titles grow the box.
pub const NODE_MIN_HEIGHT: f64 = 50.0;

/// Inner padding subtracted from the width before wrapping the title.
pub const NODE_PADDING: f64 = 20.0;

/// Corner radius of the rounded node box.
pub const NODE_CORNER_RADIUS: f64 = 20.0;

/// Drop-shadow offset; scene bounds are grown by this much on every side.
pub const SHADOW_MARGIN: f64 = 2.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Side length of the square collapse toggle on a node's right edge.
pub const TOGGLE_SIZE: f64 = 20.0;

// ── Interaction ─────────────────────────────────────────────────

/// Grid cell size for snap-to-grid moves.
pub const GRID_SIZE: f64 = 20.0;

/// Quiet period after the last edit before the text is re-laid out.
pub const RENDER_DEBOUNCE_MS: u64 = 750;

/// Zoom multiplier for one Ctrl+wheel notch towards the user.
pub const ZOOM_IN_STEP: f64 = 1.1;

/// Zoom multiplier for one Ctrl+wheel notch away from the user.
pub const ZOOM_OUT_STEP: f64 = 0.9;

/// Smallest permitted zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest permitted zoom factor.
pub const MAX_ZOOM: f64 = 10.0;

// ── Status text ─────────────────────────────────────────────────

/// Breadcrumb shown when nothing is selected.
pub const NO_SELECTION_TEXT: &str = "No node selected";

/// Separator between titles in a breadcrumb.
pub const BREADCRUMB_SEPARATOR: &str = " > ";
