//! Graph model: mind-map nodes, their connections, and the in-memory forest.
//!
//! This module defines the domain entities drawn on the canvas (`Node`,
//! `Connection`), the fixed level palette (`Rgb`), and the store that owns
//! every live entity (`Graph`).
//!
//! Parent/child links are stored as `NodeId` handles into the store rather
//! than owning pointers, so both directions are O(1) lookups without
//! reference cycles. Connections are keyed by their child: every non-root
//! node owns exactly one incoming connection.
//!
//! Visibility is derived. A node is visible iff no ancestor is collapsed, and
//! every mutation that can change that (`add_node`, `toggle_collapse`)
//! recomputes it for the affected subtree, hiding or showing the incoming
//! connections in lockstep.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::trace;
use uuid::Uuid;

use crate::camera::{Point, Rect};
use crate::connector::CubicPath;
use crate::consts::{BREADCRUMB_SEPARATOR, GRID_SIZE, NODE_WIDTH, NO_SELECTION_TEXT, TOGGLE_SIZE};

/// Unique identifier for a node. Fresh for every node ever created.
pub type NodeId = Uuid;

// =============================================================================
// COLOUR
// =============================================================================

/// An opaque RGB colour. Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Level palette: blue, red, green, yellow, purple.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(0x34, 0x98, 0xdb),
    Rgb::new(0xe7, 0x4c, 0x3c),
    Rgb::new(0x2e, 0xcc, 0x71),
    Rgb::new(0xf1, 0xc4, 0x0f),
    Rgb::new(0x9b, 0x59, 0xb6),
];

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette colour for a heading level.
    #[must_use]
    pub fn for_level(level: usize) -> Self {
        PALETTE[level % PALETTE.len()]
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Some(Self { r, g, b }),
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// NODE / CONNECTION
// =============================================================================

/// One mind-map box.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Heading text shown inside the box.
    pub title: String,
    /// Heading depth; 0 for roots.
    pub level: usize,
    /// Input line the heading came from.
    pub source_line: usize,
    /// Left edge of the box in world coordinates.
    pub x: f64,
    /// Top edge of the box in world coordinates.
    pub y: f64,
    /// Box width in world units.
    pub width: f64,
    /// Box height in world units, grown to fit the wrapped title.
    pub height: f64,
    /// Fill colour.
    pub color: Rgb,
    /// Parent handle; `None` for roots.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// When set, every descendant is hidden.
    pub collapsed: bool,
    /// Derived: true iff no ancestor is collapsed.
    pub visible: bool,
    /// Set by search when the title matches the active query.
    pub highlighted: bool,
    /// Stacking order; highlighted nodes are raised above the rest.
    pub z_index: i64,
}

impl Node {
    /// Create a detached node at `position` with the palette colour for `level`.
    #[must_use]
    pub fn new(title: impl Into<String>, level: usize, source_line: usize, position: Point, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            level,
            source_line,
            x: position.x,
            y: position.y,
            width: NODE_WIDTH,
            height,
            color: Rgb::for_level(level),
            parent: None,
            children: Vec::new(),
            collapsed: false,
            visible: true,
            highlighted: false,
            z_index: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Where an incoming connector attaches: the left-edge midpoint.
    #[must_use]
    pub fn input_anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    /// Where outgoing connectors leave: the right-edge midpoint.
    #[must_use]
    pub fn output_anchor(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    /// The collapse toggle square, flush with the right edge and vertically centred.
    #[must_use]
    pub fn toggle_rect(&self) -> Rect {
        Rect::new(
            self.x + self.width - TOGGLE_SIZE,
            self.y + self.height / 2.0 - TOGGLE_SIZE / 2.0,
            TOGGLE_SIZE,
            TOGGLE_SIZE,
        )
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Directed edge from a parent to one of its children.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Parent end (output anchor).
    pub from: NodeId,
    /// Child end (input anchor).
    pub to: NodeId,
    /// Current curve; recomputed when either endpoint moves.
    pub path: CubicPath,
    /// Mirrors the child's visibility.
    pub visible: bool,
}

/// Selection transition reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: Option<NodeId>,
    pub current: Option<NodeId>,
}

// =============================================================================
// GRAPH
// =============================================================================

/// In-memory forest of mind-map nodes.
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    /// Every node in insertion (document) order.
    order: Vec<NodeId>,
    roots: Vec<NodeId>,
    /// Keyed by the child (`Connection::to`).
    connections: HashMap<NodeId, Connection>,
    selected: Option<NodeId>,
    snap_to_grid: bool,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            roots: Vec::new(),
            connections: HashMap::new(),
            selected: None,
            snap_to_grid: false,
        }
    }

    // --- Lifecycle ---

    /// Remove every node and connection and drop the selection.
    ///
    /// Always reports the cleared selection, even when nothing was selected.
    pub fn clear(&mut self) -> SelectionChanged {
        self.nodes.clear();
        self.order.clear();
        self.roots.clear();
        self.connections.clear();
        SelectionChanged { previous: self.selected.take(), current: None }
    }

    /// Insert `node` as a root, or as the last child of `parent`.
    ///
    /// Returns `None` without inserting anything if `parent` is not in the graph.
    pub fn add_node(&mut self, mut node: Node, parent: Option<NodeId>) -> Option<NodeId> {
        let id = node.id;
        node.parent = parent;
        node.children.clear();

        match parent {
            None => {
                node.visible = true;
                self.roots.push(id);
            }
            Some(parent_id) => {
                let parent_node = self.nodes.get_mut(&parent_id)?;
                parent_node.children.push(id);
                node.visible = parent_node.visible && !parent_node.collapsed;
                let path = CubicPath::between(parent_node.output_anchor(), node.input_anchor());
                self.connections
                    .insert(id, Connection { from: parent_id, to: id, path, visible: node.visible });
            }
        }

        self.order.push(id);
        self.nodes.insert(id, node);
        Some(id)
    }

    // --- Queries ---

    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Root ids in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The incoming connection of a non-root node.
    #[must_use]
    pub fn connection_to(&self, child: &NodeId) -> Option<&Connection> {
        self.connections.get(child)
    }

    /// All connections, ordered by their child's document position.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.order.iter().filter_map(|id| self.connections.get(id))
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes sorted by `(z_index, document order)` for drawing and top-most hit-testing.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&Node> {
        let mut ordered: Vec<&Node> = self.nodes().collect();
        // Stable sort keeps document order within each z layer.
        ordered.sort_by_key(|n| n.z_index);
        ordered
    }

    /// Union of every visible node's box.
    #[must_use]
    pub fn visible_bounds(&self) -> Option<Rect> {
        self.nodes()
            .filter(|n| n.visible)
            .map(Node::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    // --- Collapse ---

    /// Flip the collapsed flag of a node that has children and re-derive descendant visibility.
    ///
    /// Returns `false` (and changes nothing) for leaves and unknown ids.
    pub fn toggle_collapse(&mut self, id: &NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if node.children.is_empty() {
            return false;
        }
        node.collapsed = !node.collapsed;
        trace!(node = %id, collapsed = node.collapsed, "collapse toggled");
        self.refresh_visibility(*id);
        true
    }

    /// Recompute `visible` for every descendant of `root`, and their connections with them.
    fn refresh_visibility(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            let show_children = node.visible && !node.collapsed;
            let children = node.children.clone();
            for child in children {
                if let Some(child_node) = self.nodes.get_mut(&child) {
                    child_node.visible = show_children;
                }
                if let Some(conn) = self.connections.get_mut(&child) {
                    conn.visible = show_children;
                }
                stack.push(child);
            }
        }
    }

    /// Expand every collapsed ancestor of `id`, nearest first.
    fn expand_ancestors(&mut self, id: NodeId) {
        let mut cursor = self.nodes.get(&id).and_then(|n| n.parent);
        while let Some(ancestor) = cursor {
            let Some(node) = self.nodes.get(&ancestor) else {
                break;
            };
            let collapsed = node.collapsed;
            cursor = node.parent;
            if collapsed {
                self.toggle_collapse(&ancestor);
            }
        }
    }

    // --- Search ---

    /// Highlight nodes whose title contains `query` (case-insensitive), raising them in draw
    /// order and expanding their ancestors so they are visible.
    ///
    /// An empty query clears every highlight and leaves collapse state alone. Returns the
    /// matching ids in document order.
    pub fn search(&mut self, query: &str) -> Vec<NodeId> {
        if query.is_empty() {
            for node in self.nodes.values_mut() {
                node.highlighted = false;
                node.z_index = 0;
            }
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut matches = Vec::new();
        for id in self.order.clone() {
            let Some(node) = self.nodes.get_mut(&id) else {
                continue;
            };
            let hit = node.title.to_lowercase().contains(&needle);
            node.highlighted = hit;
            node.z_index = i64::from(hit);
            if hit {
                matches.push(id);
                self.expand_ancestors(id);
            }
        }
        matches
    }

    // --- Movement ---

    /// Move a node's top-left corner to `position` and re-route its connectors.
    ///
    /// Returns `false` for unknown ids. No other node moves.
    pub fn move_node(&mut self, id: &NodeId, position: Point) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        node.x = position.x;
        node.y = position.y;
        let children = node.children.clone();

        self.reroute(id);
        for child in &children {
            self.reroute(child);
        }
        true
    }

    /// Recompute the incoming connection path of `child`, if it has one.
    fn reroute(&mut self, child: &NodeId) {
        let Some(conn) = self.connections.get(child) else {
            return;
        };
        let (Some(from), Some(to)) = (self.nodes.get(&conn.from), self.nodes.get(child)) else {
            return;
        };
        let path = CubicPath::between(from.output_anchor(), to.input_anchor());
        if let Some(conn) = self.connections.get_mut(child) {
            conn.path = path;
        }
    }

    /// Enable or disable snap-to-grid for interactive moves.
    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    #[must_use]
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// Where a node proposed at `proposed` should actually land.
    ///
    /// With snap enabled the position is rounded to the grid, unless the snapped box would
    /// overlap another node, in which case the raw position is kept.
    #[must_use]
    pub fn resolve_move(&self, id: &NodeId, proposed: Point) -> Point {
        if !self.snap_to_grid {
            return proposed;
        }
        let Some(node) = self.nodes.get(id) else {
            return proposed;
        };

        let snapped = Point::new(
            (proposed.x / GRID_SIZE).round() * GRID_SIZE,
            (proposed.y / GRID_SIZE).round() * GRID_SIZE,
        );
        let candidate = Rect::new(snapped.x, snapped.y, node.width, node.height);
        let collides = self
            .nodes
            .values()
            .any(|other| other.id != *id && other.bounds().intersects(&candidate));

        if collides { proposed } else { snapped }
    }

    // --- Selection ---

    /// Select `id`, or clear the selection with `None`.
    ///
    /// Returns the transition, or `None` when nothing changed (same node, or unknown id).
    pub fn select_node(&mut self, id: Option<NodeId>) -> Option<SelectionChanged> {
        if let Some(target) = id {
            if !self.nodes.contains_key(&target) {
                return None;
            }
        }
        if self.selected == id {
            return None;
        }
        let previous = self.selected.take();
        self.selected = id;
        Some(SelectionChanged { previous, current: id })
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Titles from the root down to `id`.
    #[must_use]
    pub fn path_titles(&self, id: &NodeId) -> Vec<&str> {
        let mut titles = Vec::new();
        let mut cursor = self.nodes.get(id);
        while let Some(node) = cursor {
            titles.push(node.title.as_str());
            cursor = node.parent.and_then(|p| self.nodes.get(&p));
        }
        titles.reverse();
        titles
    }

    /// Status-line breadcrumb for the current selection.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        match self.selected {
            Some(id) => self.path_titles(&id).join(BREADCRUMB_SEPARATOR),
            None => NO_SELECTION_TEXT.to_owned(),
        }
    }

    // --- Styling ---

    /// Replace a single node's colour. Returns `false` for unknown ids.
    pub fn recolor(&mut self, id: &NodeId, color: Rgb) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        node.color = color;
        true
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
