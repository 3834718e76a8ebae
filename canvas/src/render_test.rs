#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;
use crate::graph::Node;

fn make_tree(graph: &mut Graph) -> (NodeId, NodeId, NodeId) {
    let root = graph.add_node(Node::new("Root", 0, 0, Point::new(0.0, 0.0), 50.0), None).unwrap();
    let a = graph.add_node(Node::new("A", 1, 1, Point::new(300.0, -50.0), 50.0), Some(root)).unwrap();
    let b = graph.add_node(Node::new("B", 1, 2, Point::new(300.0, 50.0), 50.0), Some(root)).unwrap();
    (root, a, b)
}

#[derive(Default)]
struct CountingAdapter {
    frames: usize,
    last_nodes: usize,
}

impl RenderAdapter for CountingAdapter {
    fn draw(&mut self, scene: &Scene) {
        self.frames += 1;
        self.last_nodes = scene.nodes.len();
    }
}

#[test]
fn empty_graph_has_no_bounds() {
    let scene = build_scene(&Graph::new(), &UiState::default(), &Camera::default());
    assert!(scene.is_empty());
    assert!(scene.bounds.is_none());
    assert!(scene.connectors.is_empty());
}

#[test]
fn scene_lists_visible_nodes_and_connectors() {
    let mut graph = Graph::new();
    make_tree(&mut graph);
    let scene = build_scene(&graph, &UiState::default(), &Camera::default());
    assert_eq!(scene.nodes.len(), 3);
    assert_eq!(scene.connectors.len(), 2);
}

#[test]
fn collapsed_children_are_left_out() {
    let mut graph = Graph::new();
    let (root, ..) = make_tree(&mut graph);
    graph.toggle_collapse(&root);
    let scene = build_scene(&graph, &UiState::default(), &Camera::default());
    assert_eq!(scene.nodes.len(), 1);
    assert!(scene.connectors.is_empty());
    assert!(scene.nodes[0].collapsed);
    assert_eq!(scene.bounds, Some(Rect::new(-2.0, -2.0, 204.0, 54.0)));
}

#[test]
fn bounds_include_shadow_margin() {
    let mut graph = Graph::new();
    make_tree(&mut graph);
    let scene = build_scene(&graph, &UiState::default(), &Camera::default());
    assert_eq!(scene.bounds, Some(Rect::new(-2.0, -52.0, 504.0, 154.0)));
}

#[test]
fn toggle_only_on_parents() {
    let mut graph = Graph::new();
    let (root, a, _) = make_tree(&mut graph);
    let scene = build_scene(&graph, &UiState::default(), &Camera::default());
    let view = |id: NodeId| scene.nodes.iter().find(|n| n.id == id).unwrap();
    assert!(view(root).toggle.is_some());
    assert!(view(a).toggle.is_none());
}

#[test]
fn flags_reflect_selection_hover_and_highlight() {
    let mut graph = Graph::new();
    let (root, a, b) = make_tree(&mut graph);
    graph.select_node(Some(a));
    graph.search("B");
    let ui = UiState { hovered: Some(root), cursor: None };
    let scene = build_scene(&graph, &ui, &Camera::default());

    // Highlighted node is painted last.
    let last = scene.nodes.last().unwrap();
    assert_eq!(last.id, b);
    assert!(last.highlighted);

    let view = |id: NodeId| scene.nodes.iter().find(|n| n.id == id).unwrap();
    assert!(view(a).selected);
    assert!(!view(b).selected);
    assert!(view(root).hovered);
}

#[test]
fn scene_serializes_colours_as_hex() {
    let mut graph = Graph::new();
    make_tree(&mut graph);
    let scene = build_scene(&graph, &UiState::default(), &Camera::default());
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["nodes"][0]["color"], "#3498db");
    assert_eq!(json["camera"]["zoom"], 1.0);
}

#[test]
fn adapter_receives_scene() {
    let mut graph = Graph::new();
    make_tree(&mut graph);
    let mut adapter = CountingAdapter::default();
    adapter.draw(&build_scene(&graph, &UiState::default(), &Camera::default()));
    assert_eq!(adapter.frames, 1);
    assert_eq!(adapter.last_nodes, 3);
}
