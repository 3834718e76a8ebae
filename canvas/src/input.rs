//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Each variant carries what the engine needs to turn the next
//! pointer event into a graph mutation or a camera change.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::graph::NodeId;

/// Modifier keys held during an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held. Turns the wheel into zoom.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button. Selects, drags and toggles.
    Primary,
    /// Middle mouse button. Pans over empty canvas.
    Middle,
    /// Right mouse button. Pans over empty canvas.
    Secondary,
}

impl Button {
    /// Whether this button starts a pan when pressed over empty canvas.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Middle | Self::Secondary)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Pointer cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Over a draggable node body.
    Grab,
    /// While a node is being dragged.
    Grabbing,
    /// Over a collapse toggle.
    Pointer,
    /// While panning.
    Move,
}

impl CursorHint {
    /// CSS-style cursor name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Pointer => "pointer",
            Self::Move => "move",
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Node under the pointer while idle; drawn with a lighter outline.
    pub hovered: Option<NodeId>,
    /// Last cursor hint emitted, so repeats are suppressed.
    pub cursor: Option<CursorHint>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Primary button went down on a node body; no movement yet.
    Selecting {
        /// The pressed node, already selected.
        id: NodeId,
        /// Pointer position minus the node's top-left corner, in world units.
        grab: Point,
    },
    /// A node is following the pointer.
    DraggingNode {
        /// Id of the node being dragged.
        id: NodeId,
        /// Pointer position minus the node's top-left corner, in world units.
        grab: Point,
    },
    /// The view is scrolling with the pointer.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// Node the current gesture is acting on, if any.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Selecting { id, .. } | Self::DraggingNode { id, .. } => Some(*id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }
}
