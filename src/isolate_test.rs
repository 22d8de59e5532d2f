//! Tests for the click-to-isolate state machine.

use super::*;
use crate::graph::LinkGraph;
use crate::models::Edge;

// ============================================================================
// Helpers
// ============================================================================

/// A with successors {B, C}, an incoming edge D -> A, and an edge among
/// neighbors B -> C. Edge ids follow list order.
fn sample_graph() -> LinkGraph {
    LinkGraph::build(vec![
        Edge::new("A", "B", "to b"),  // 0
        Edge::new("A", "C", "to c"),  // 1
        Edge::new("D", "A", "to a"),  // 2
        Edge::new("B", "C", "b to c"), // 3
    ])
    .unwrap()
}

fn node_set(names: &[&str]) -> std::collections::HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn click_from_overview_isolates() {
    let state = VisibilityState::Overview.apply_click("A");
    assert_eq!(state, VisibilityState::Isolated("A".to_string()));
}

#[test]
fn click_on_focus_returns_to_overview() {
    let state = VisibilityState::Isolated("A".to_string()).apply_click("A");
    assert_eq!(state, VisibilityState::Overview);
}

#[test]
fn click_on_other_node_refocuses_directly() {
    let state = VisibilityState::Isolated("A".to_string()).apply_click("B");
    assert_eq!(state, VisibilityState::Isolated("B".to_string()));
}

// ============================================================================
// Render Instructions
// ============================================================================

#[test]
fn overview_shows_all_nodes_and_no_edges() {
    let graph = sample_graph();
    let instr = render_instructions(&graph, &VisibilityState::Overview);
    assert_eq!(instr.visible_nodes, node_set(&["A", "B", "C", "D"]));
    assert!(instr.visible_edges.is_empty());
}

#[test]
fn isolation_shows_focus_successors_and_outgoing_edges_only() {
    let graph = sample_graph();
    let instr = render_instructions(&graph, &VisibilityState::Isolated("A".to_string()));

    assert_eq!(instr.visible_nodes, node_set(&["A", "B", "C"]));
    // A->B and A->C visible; D->A (incoming) and B->C (among neighbors) not.
    assert_eq!(
        instr.visible_edges,
        [0usize, 1].into_iter().collect()
    );
}

#[test]
fn isolating_a_leaf_shows_only_the_leaf() {
    let graph = sample_graph();
    let instr = render_instructions(&graph, &VisibilityState::Isolated("C".to_string()));
    assert_eq!(instr.visible_nodes, node_set(&["C"]));
    assert!(instr.visible_edges.is_empty());
}

#[test]
fn self_loop_is_visible_when_isolated() {
    let graph = LinkGraph::build(vec![Edge::new("A", "A", "me")]).unwrap();
    let instr = render_instructions(&graph, &VisibilityState::Isolated("A".to_string()));
    assert_eq!(instr.visible_nodes, node_set(&["A"]));
    assert_eq!(instr.visible_edges, [0usize].into_iter().collect());
}

// ============================================================================
// Controller
// ============================================================================

#[test]
fn toggle_returns_to_overview_instructions() {
    let graph = sample_graph();
    let mut ctl = IsolationController::new();
    let initial = ctl.instructions(&graph);

    ctl.on_node_click(&graph, "A");
    ctl.on_node_click(&graph, "A");

    assert_eq!(ctl.state(), &VisibilityState::Overview);
    assert_eq!(ctl.instructions(&graph), initial);
}

#[test]
fn first_click_delta_hides_strangers_and_shows_outgoing_edges() {
    let graph = sample_graph();
    let mut ctl = IsolationController::new();

    let delta = ctl.on_node_click(&graph, "A");
    assert_eq!(delta.hide_nodes, vec!["D".to_string()]);
    assert!(delta.show_nodes.is_empty()); // A, B, C were already visible
    assert_eq!(delta.show_edges, vec![0, 1]);
    assert!(delta.hide_edges.is_empty());
}

#[test]
fn toggle_back_delta_restores_nodes_and_hides_edges() {
    let graph = sample_graph();
    let mut ctl = IsolationController::new();
    ctl.on_node_click(&graph, "A");

    let delta = ctl.on_node_click(&graph, "A");
    assert_eq!(delta.show_nodes, vec!["D".to_string()]);
    assert_eq!(delta.hide_edges, vec![0, 1]);
    assert!(delta.hide_nodes.is_empty());
    assert!(delta.show_edges.is_empty());
}

#[test]
fn refocus_delta_moves_between_neighborhoods() {
    let graph = sample_graph();
    let mut ctl = IsolationController::new();
    ctl.on_node_click(&graph, "A"); // visible: A, B, C; edges 0, 1

    let delta = ctl.on_node_click(&graph, "B"); // visible: B, C; edge 3
    assert_eq!(ctl.state(), &VisibilityState::Isolated("B".to_string()));
    assert_eq!(delta.hide_nodes, vec!["A".to_string()]);
    assert!(delta.show_nodes.is_empty());
    assert_eq!(delta.show_edges, vec![3]);
    assert_eq!(delta.hide_edges, vec![0, 1]);
}

#[test]
fn unknown_node_click_is_ignored() {
    let graph = sample_graph();
    let mut ctl = IsolationController::new();
    ctl.on_node_click(&graph, "A");
    let before = ctl.instructions(&graph);

    let delta = ctl.on_node_click(&graph, "nope");
    assert!(delta.is_empty());
    assert_eq!(ctl.state(), &VisibilityState::Isolated("A".to_string()));
    assert_eq!(ctl.instructions(&graph), before);
}
