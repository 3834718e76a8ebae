//! Hit-testing: which node, and which part of it, lies under a world point.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::graph::{Graph, NodeId};

/// Which part of a node was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    /// The collapse toggle square. Only reported for nodes with children.
    CollapseToggle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub node_id: NodeId,
    pub part: HitPart,
}

/// Find the top-most visible node under `world_pt`.
///
/// Nodes are tested in reverse draw order, so a highlighted node wins over one
/// drawn beneath it. The toggle region is tested strictly: a point on its border
/// counts as the body.
#[must_use]
pub fn hit_test(world_pt: Point, graph: &Graph) -> Option<Hit> {
    graph
        .draw_order()
        .into_iter()
        .rev()
        .filter(|node| node.visible)
        .find(|node| node.bounds().contains(world_pt))
        .map(|node| {
            let part = if node.has_children() && node.toggle_rect().contains_strictly(world_pt) {
                HitPart::CollapseToggle
            } else {
                HitPart::Body
            };
            Hit { node_id: node.id, part }
        })
}
