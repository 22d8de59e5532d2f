//! Click-to-isolate interaction state machine for the network view.
//!
//! The controller owns the only mutable state in the system. Everything it
//! decides is expressed as pure data: a click is folded into the current
//! `VisibilityState`, render instructions are derived from state + graph,
//! and the renderer receives a show/hide delta to apply verbatim. No DOM or
//! canvas knowledge lives here, which is what makes the machine testable.

use crate::graph::LinkGraph;
use crate::models::VisibilityDelta;
use std::collections::HashSet;

// ============================================================================
// Visibility State
// ============================================================================

/// `Overview` shows every node and hides every edge. The full edge set is
/// unreadable on real sites, so edges only appear once a node is focused.
/// `Isolated` restricts the view to one focus node and its successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityState {
    Overview,
    Isolated(String),
}

impl VisibilityState {
    /// Fold one click into the state machine.
    ///
    /// Clicking the focused node toggles back to the overview; clicking any
    /// other node refocuses directly, with no intermediate overview step.
    pub fn apply_click(&self, node: &str) -> VisibilityState {
        match self {
            VisibilityState::Isolated(focus) if focus == node => VisibilityState::Overview,
            _ => VisibilityState::Isolated(node.to_string()),
        }
    }
}

// ============================================================================
// Render Instructions
// ============================================================================

/// The full visible sets for a state. Nodes are identified by page id,
/// edges by their edge-list index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstructions {
    pub visible_nodes: HashSet<String>,
    pub visible_edges: HashSet<usize>,
}

/// Derive what the renderer should show for `state`.
///
/// Isolation is deliberately asymmetric: it shows what the focus links out
/// to, not what links into it, so edges incoming to the focus and edges
/// among its neighbors stay hidden.
pub fn render_instructions(graph: &LinkGraph, state: &VisibilityState) -> RenderInstructions {
    match state {
        VisibilityState::Overview => RenderInstructions {
            visible_nodes: graph.nodes().map(str::to_string).collect(),
            visible_edges: HashSet::new(),
        },
        VisibilityState::Isolated(focus) => {
            let mut visible_nodes: HashSet<String> = graph
                .adjacency(focus)
                .map(|succ| succ.iter().cloned().collect())
                .unwrap_or_default();
            visible_nodes.insert(focus.clone());

            let visible_edges = graph
                .outgoing(focus)
                .map(|ids| {
                    ids.iter()
                        .copied()
                        .filter(|&id| visible_nodes.contains(&graph.edges()[id].target))
                        .collect()
                })
                .unwrap_or_default();

            RenderInstructions {
                visible_nodes,
                visible_edges,
            }
        }
    }
}

// ============================================================================
// Isolation Controller
// ============================================================================

/// Owns the visibility state for one rendered session. Built fresh whenever
/// a dataset is (re)loaded, so the view always starts at the overview.
#[derive(Debug, Clone)]
pub struct IsolationController {
    state: VisibilityState,
}

impl IsolationController {
    pub fn new() -> Self {
        IsolationController {
            state: VisibilityState::Overview,
        }
    }

    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    pub fn instructions(&self, graph: &LinkGraph) -> RenderInstructions {
        render_instructions(graph, &self.state)
    }

    /// React to a node click: transition, then emit the show/hide delta the
    /// renderer applies. A click on an id the graph does not know (only
    /// possible from a stale index on the client) is ignored rather than
    /// surfaced, leaving state and view untouched.
    pub fn on_node_click(&mut self, graph: &LinkGraph, node: &str) -> VisibilityDelta {
        if !graph.contains(node) {
            tracing::warn!(node, "click on unknown node ignored");
            return VisibilityDelta::default();
        }

        let before = render_instructions(graph, &self.state);
        self.state = self.state.apply_click(node);
        let after = render_instructions(graph, &self.state);
        diff(&before, &after)
    }
}

impl Default for IsolationController {
    fn default() -> Self {
        Self::new()
    }
}

/// Difference between two instruction sets, with sorted members so the
/// payload (and the tests) are deterministic.
fn diff(before: &RenderInstructions, after: &RenderInstructions) -> VisibilityDelta {
    let mut delta = VisibilityDelta {
        show_nodes: after
            .visible_nodes
            .difference(&before.visible_nodes)
            .cloned()
            .collect(),
        hide_nodes: before
            .visible_nodes
            .difference(&after.visible_nodes)
            .cloned()
            .collect(),
        show_edges: after
            .visible_edges
            .difference(&before.visible_edges)
            .copied()
            .collect(),
        hide_edges: before
            .visible_edges
            .difference(&after.visible_edges)
            .copied()
            .collect(),
    };
    delta.show_nodes.sort();
    delta.hide_nodes.sort();
    delta.show_edges.sort_unstable();
    delta.hide_edges.sort_unstable();
    delta
}

#[cfg(test)]
#[path = "isolate_test.rs"]
mod isolate_test;
