//! Rendering contract: a drawable snapshot of the graph and the adapter that consumes it.
//!
//! The core never draws. [`build_scene`] flattens the live graph into plain
//! views in paint order (connectors beneath nodes, nodes by z-index), and a
//! [`RenderAdapter`] turns that into pixels, text, JSON, or anything else.
//! Hidden nodes and connectors are left out of the snapshot entirely.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::camera::{Camera, Rect};
use crate::connector::CubicPath;
use crate::consts::{NODE_CORNER_RADIUS, SHADOW_MARGIN};
use crate::graph::{Graph, NodeId, Rgb};
use crate::input::UiState;

/// Anything that can paint a [`Scene`].
pub trait RenderAdapter {
    fn draw(&mut self, scene: &Scene);
}

/// One visible node box.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub title: String,
    pub level: usize,
    pub source_line: usize,
    pub rect: Rect,
    pub corner_radius: f64,
    pub color: Rgb,
    /// Collapse toggle square; absent on leaves.
    pub toggle: Option<Rect>,
    pub collapsed: bool,
    pub selected: bool,
    pub hovered: bool,
    pub highlighted: bool,
}

/// One visible parent-to-child connector.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectorView {
    pub from: NodeId,
    pub to: NodeId,
    pub path: CubicPath,
}

/// Everything a render adapter needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub camera: Camera,
    /// Drawn first.
    pub connectors: Vec<ConnectorView>,
    /// Drawn after connectors, bottom-most first.
    pub nodes: Vec<NodeView>,
    /// Union of visible nodes and connectors, grown by the shadow margin. `None` when nothing is visible.
    pub bounds: Option<Rect>,
}

impl Scene {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Snapshot the visible part of `graph` for drawing.
#[must_use]
pub fn build_scene(graph: &Graph, ui: &UiState, camera: &Camera) -> Scene {
    let selected = graph.selected();

    let connectors: Vec<ConnectorView> = graph
        .connections()
        .filter(|c| c.visible)
        .map(|c| ConnectorView { from: c.from, to: c.to, path: c.path })
        .collect();

    let nodes: Vec<NodeView> = graph
        .draw_order()
        .into_iter()
        .filter(|n| n.visible)
        .map(|n| NodeView {
            id: n.id,
            title: n.title.clone(),
            level: n.level,
            source_line: n.source_line,
            rect: n.bounds(),
            corner_radius: NODE_CORNER_RADIUS,
            color: n.color,
            toggle: n.has_children().then(|| n.toggle_rect()),
            collapsed: n.collapsed,
            selected: selected == Some(n.id),
            hovered: ui.hovered == Some(n.id),
            highlighted: n.highlighted,
        })
        .collect();

    let bounds = nodes
        .iter()
        .map(|n| n.rect)
        .chain(connectors.iter().map(|c| c.path.bounds()))
        .reduce(|acc, r| acc.union(&r))
        .map(|r| r.inflate(SHADOW_MARGIN));

    Scene { camera: *camera, connectors, nodes, bounds }
}
