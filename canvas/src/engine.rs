//! Interaction controller: routes text edits and pointer gestures into the graph.
//!
//! `EngineCore` owns the graph, the camera and the gesture state, and is the
//! only thing that mutates them. Every handler returns the [`Action`]s the host
//! should react to: repaint, change the cursor, move the text caret, or ask the
//! user for a colour. Nothing here touches a window or a clock; time comes in
//! as an `Instant` argument so the debounce is deterministic under test.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::camera::{Camera, Point};
use crate::consts::{RENDER_DEBOUNCE_MS, ZOOM_IN_STEP, ZOOM_OUT_STEP};
use crate::debounce::Debounce;
use crate::graph::{Graph, Node, NodeId, Rgb, SelectionChanged};
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, CursorHint, InputState, Modifiers, UiState, WheelDelta};
use crate::layout::{GlyphMetrics, TextMeasure, layout};
use crate::outline::parse;
use crate::render::{Scene, build_scene};

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Selection moved. Carries what the host needs to sync the text caret and status line.
    SelectionChanged { id: Option<NodeId>, source_line: Option<usize>, breadcrumb: String },
    CollapseToggled { id: NodeId, collapsed: bool },
    NodeMoved { id: NodeId, position: Point },
    SetCursor(CursorHint),
    /// The scene changed and should be repainted.
    RenderNeeded,
    /// The forest was rebuilt from text.
    Rendered { placed: usize, dropped: usize },
    /// The user asked to recolour a node; answer with [`EngineCore::recolor`].
    ColorChangeRequested { id: NodeId, current: Rgb },
    SearchApplied { matches: Vec<NodeId> },
}

/// Core engine state: all interaction logic, independent of any window system.
pub struct EngineCore {
    pub graph: Graph,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    debounce: Debounce,
    measure: Box<dyn TextMeasure>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_settings(Duration::from_millis(RENDER_DEBOUNCE_MS), Box::new(GlyphMetrics::default()))
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom quiet period and text metrics.
    #[must_use]
    pub fn with_settings(debounce: Duration, measure: Box<dyn TextMeasure>) -> Self {
        Self {
            graph: Graph::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            debounce: Debounce::new(debounce),
            measure,
        }
    }

    // --- Text ---

    /// Record a text edit at `now`. The re-layout happens once the buffer has been quiet.
    pub fn note_edit(&mut self, now: Instant) {
        self.debounce.schedule(now);
    }

    /// True while an edit is waiting for its quiet period to end.
    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// When the pending re-layout becomes due, if any.
    #[must_use]
    pub fn render_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Re-layout `text` if the debounce has elapsed at `now`. Returns no actions otherwise.
    pub fn render_if_due(&mut self, now: Instant, text: &str) -> Vec<Action> {
        if self.debounce.fire_if_due(now) { self.render_text(text) } else { Vec::new() }
    }

    /// Parse `text` and replace the whole forest, cancelling any pending debounced render.
    pub fn render_text(&mut self, text: &str) -> Vec<Action> {
        self.debounce.cancel();
        self.input = InputState::Idle;
        self.ui.hovered = None;

        let records = parse(text);
        let outcome = layout(&records, &mut self.graph, self.measure.as_ref());
        debug!(placed = outcome.placed, dropped = outcome.dropped, "text rendered");

        vec![
            self.selection_action(outcome.selection),
            Action::Rendered { placed: outcome.placed, dropped: outcome.dropped },
            Action::RenderNeeded,
        ]
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let hit = hit_test(world, &self.graph);
        let mut actions = Vec::new();

        match (button, hit) {
            (Button::Primary, Some(hit)) if hit.part == HitPart::CollapseToggle => {
                if self.graph.toggle_collapse(&hit.node_id) {
                    let collapsed = self.graph.get(&hit.node_id).is_some_and(|n| n.collapsed);
                    actions.push(Action::CollapseToggled { id: hit.node_id, collapsed });
                    actions.push(Action::RenderNeeded);
                }
            }
            (Button::Primary, Some(hit)) => {
                let Some(origin) = self.graph.get(&hit.node_id).map(Node::position) else {
                    return actions;
                };
                if let Some(change) = self.graph.select_node(Some(hit.node_id)) {
                    actions.push(self.selection_action(change));
                    actions.push(Action::RenderNeeded);
                }
                let grab = Point::new(world.x - origin.x, world.y - origin.y);
                self.input = InputState::Selecting { id: hit.node_id, grab };
            }
            (Button::Primary, None) => {
                if let Some(change) = self.graph.select_node(None) {
                    actions.push(self.selection_action(change));
                    actions.push(Action::RenderNeeded);
                }
            }
            (button, None) if button.pans() => {
                self.input = InputState::Panning { last_screen: screen_pt };
                self.push_cursor(&mut actions, CursorHint::Move);
            }
            _ => {}
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let mut actions = Vec::new();

        match self.input {
            InputState::Selecting { id, grab } | InputState::DraggingNode { id, grab } => {
                if matches!(self.input, InputState::Selecting { .. }) {
                    self.push_cursor(&mut actions, CursorHint::Grabbing);
                }
                self.input = InputState::DraggingNode { id, grab };
                let proposed = Point::new(world.x - grab.x, world.y - grab.y);
                let position = self.graph.resolve_move(&id, proposed);
                if self.graph.move_node(&id, position) {
                    actions.push(Action::NodeMoved { id, position });
                    actions.push(Action::RenderNeeded);
                }
            }
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                actions.push(Action::RenderNeeded);
            }
            InputState::Idle => self.update_hover(world, &mut actions),
        }
        actions
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        self.update_hover(self.camera.screen_to_world(screen_pt), &mut actions);
        actions
    }

    /// Pointer left the canvas: end any gesture and drop the hover.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if self.ui.hovered.take().is_some() {
            actions.push(Action::RenderNeeded);
        }
        self.push_cursor(&mut actions, CursorHint::Default);
        actions
    }

    /// Double-click on a node body asks the host for a new colour.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        hit_test(world, &self.graph)
            .filter(|hit| hit.part == HitPart::Body)
            .and_then(|hit| self.graph.get(&hit.node_id))
            .map(|node| vec![Action::ColorChangeRequested { id: node.id, current: node.color }])
            .unwrap_or_default()
    }

    /// Ctrl+wheel zooms around the pointer; a plain wheel scrolls.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl {
            if delta.dy.abs() < f64::EPSILON {
                return Vec::new();
            }
            let factor = if delta.dy < 0.0 { ZOOM_IN_STEP } else { ZOOM_OUT_STEP };
            self.camera.zoom_at(screen_pt, factor);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    // --- Commands ---

    /// Highlight matches for `query`, expanding whatever hides them.
    pub fn search(&mut self, query: &str) -> Vec<Action> {
        let matches = self.graph.search(query);
        vec![Action::SearchApplied { matches }, Action::RenderNeeded]
    }

    /// Collapse or expand a node by id, as a click on its toggle would.
    pub fn toggle_collapse(&mut self, id: &NodeId) -> Vec<Action> {
        if !self.graph.toggle_collapse(id) {
            return Vec::new();
        }
        let collapsed = self.graph.get(id).is_some_and(|n| n.collapsed);
        vec![Action::CollapseToggled { id: *id, collapsed }, Action::RenderNeeded]
    }

    /// Select a node by id, or clear the selection.
    pub fn select(&mut self, id: Option<NodeId>) -> Vec<Action> {
        match self.graph.select_node(id) {
            Some(change) => vec![self.selection_action(change), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.graph.set_snap_to_grid(enabled);
    }

    /// Apply the host's answer to [`Action::ColorChangeRequested`].
    pub fn recolor(&mut self, id: &NodeId, color: Rgb) -> Vec<Action> {
        if self.graph.recolor(id, color) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Update viewport dimensions in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Fit every visible node into the viewport. No-op on an empty scene.
    pub fn fit_view(&mut self) -> Vec<Action> {
        let Some(bounds) = build_scene(&self.graph, &self.ui, &self.camera).bounds else {
            return Vec::new();
        };
        self.camera.fit(bounds, self.viewport_width, self.viewport_height);
        vec![Action::RenderNeeded]
    }

    /// Fit the selected node into the viewport. No-op without a selection.
    pub fn zoom_to_selection(&mut self) -> Vec<Action> {
        let Some(node) = self.graph.selected().and_then(|id| self.graph.get(&id)) else {
            return Vec::new();
        };
        self.camera.fit(node.bounds(), self.viewport_width, self.viewport_height);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected node, if any.
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.graph.selected()
    }

    /// Status-line text for the current selection.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        self.graph.breadcrumb()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Snapshot for the render adapter.
    #[must_use]
    pub fn scene(&self) -> Scene {
        build_scene(&self.graph, &self.ui, &self.camera)
    }

    // --- Internals ---

    fn selection_action(&self, change: SelectionChanged) -> Action {
        let source_line = change.current.and_then(|id| self.graph.get(&id)).map(|n| n.source_line);
        Action::SelectionChanged { id: change.current, source_line, breadcrumb: self.graph.breadcrumb() }
    }

    fn update_hover(&mut self, world: Point, actions: &mut Vec<Action>) {
        let hit = hit_test(world, &self.graph);
        let hovered = hit.map(|h| h.node_id);
        if hovered != self.ui.hovered {
            self.ui.hovered = hovered;
            actions.push(Action::RenderNeeded);
        }
        let cursor = match hit.map(|h| h.part) {
            Some(HitPart::CollapseToggle) => CursorHint::Pointer,
            Some(HitPart::Body) => CursorHint::Grab,
            None => CursorHint::Default,
        };
        self.push_cursor(actions, cursor);
    }

    /// Emit a cursor change only when it differs from the last one sent.
    fn push_cursor(&mut self, actions: &mut Vec<Action>, cursor: CursorHint) {
        if self.ui.cursor != Some(cursor) {
            self.ui.cursor = Some(cursor);
            actions.push(Action::SetCursor(cursor));
        }
    }
}
