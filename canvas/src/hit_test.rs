use super::*;
use crate::graph::Node;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn make_node(title: &str, x: f64, y: f64) -> Node {
    Node::new(title, 0, 0, pt(x, y), 50.0)
}

fn make_parent_child(graph: &mut Graph) -> (NodeId, NodeId) {
    let parent = graph.add_node(make_node("Parent", 0.0, 0.0), None).unwrap();
    let child = graph.add_node(make_node("Child", 300.0, 0.0), Some(parent)).unwrap();
    (parent, child)
}

// =============================================================
// Misses
// =============================================================

#[test]
fn empty_graph_misses() {
    assert!(hit_test(pt(0.0, 0.0), &Graph::new()).is_none());
}

#[test]
fn empty_canvas_misses() {
    let mut graph = Graph::new();
    make_parent_child(&mut graph);
    assert!(hit_test(pt(250.0, 25.0), &graph).is_none());
    assert!(hit_test(pt(-1.0, 25.0), &graph).is_none());
}

#[test]
fn hidden_nodes_are_skipped() {
    let mut graph = Graph::new();
    let (parent, _) = make_parent_child(&mut graph);
    graph.toggle_collapse(&parent);
    assert!(hit_test(pt(350.0, 25.0), &graph).is_none());
}

// =============================================================
// Parts
// =============================================================

#[test]
fn body_hit() {
    let mut graph = Graph::new();
    let (parent, _) = make_parent_child(&mut graph);
    let hit = hit_test(pt(50.0, 25.0), &graph).unwrap();
    assert_eq!(hit, Hit { node_id: parent, part: HitPart::Body });
}

#[test]
fn toggle_hit_on_parent() {
    let mut graph = Graph::new();
    let (parent, _) = make_parent_child(&mut graph);
    let hit = hit_test(pt(190.0, 25.0), &graph).unwrap();
    assert_eq!(hit, Hit { node_id: parent, part: HitPart::CollapseToggle });
}

#[test]
fn toggle_border_counts_as_body() {
    let mut graph = Graph::new();
    let (parent, _) = make_parent_child(&mut graph);
    // Left edge of the toggle square is x = 180.
    let hit = hit_test(pt(180.0, 25.0), &graph).unwrap();
    assert_eq!(hit.node_id, parent);
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn leaf_has_no_toggle() {
    let mut graph = Graph::new();
    let (_, child) = make_parent_child(&mut graph);
    let hit = hit_test(pt(490.0, 25.0), &graph).unwrap();
    assert_eq!(hit, Hit { node_id: child, part: HitPart::Body });
}

// =============================================================
// Stacking
// =============================================================

#[test]
fn later_node_wins_on_overlap() {
    let mut graph = Graph::new();
    graph.add_node(make_node("Below", 0.0, 0.0), None).unwrap();
    let above = graph.add_node(make_node("Above", 100.0, 0.0), None).unwrap();
    assert_eq!(hit_test(pt(150.0, 25.0), &graph).unwrap().node_id, above);
}

#[test]
fn highlighted_node_wins_on_overlap() {
    let mut graph = Graph::new();
    let below = graph.add_node(make_node("Match me", 0.0, 0.0), None).unwrap();
    graph.add_node(make_node("Other", 100.0, 0.0), None).unwrap();
    graph.search("match");
    assert_eq!(hit_test(pt(150.0, 25.0), &graph).unwrap().node_id, below);
}
