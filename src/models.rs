//! Data models for the link graph explorer.
//!
//! This module contains the canonical edge record produced by the CSV
//! normalizer plus the serialized payloads handed to the in-browser
//! renderers: the network graph, the per-page flow diagram, and the
//! visibility delta emitted after each click.

use serde::{Deserialize, Serialize};

// ============================================================================
// Canonical Edge
// ============================================================================

/// One directed internal link: source page, destination page, anchor text.
///
/// Anchor text is an attribute of the edge, not part of its identity:
/// multiple edges may share `(source, target)` with different anchors, and
/// duplicates are preserved because they represent distinct occurrences in
/// the page content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub anchor_text: String,
}

impl Edge {
    /// Build an edge, trimming leading/trailing whitespace from all fields.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        anchor_text: impl Into<String>,
    ) -> Self {
        Edge {
            source: source.into().trim().to_string(),
            target: target.into().trim().to_string(),
            anchor_text: anchor_text.into().trim().to_string(),
        }
    }
}

// ============================================================================
// Network Renderer Payload
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    /// Render size: 10 + 3 * in_degree, so heavily linked pages stand out.
    pub value: usize,
    pub in_degree: usize,
    /// Tooltip text shown on hover.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    /// Stable edge id: the index of the edge in the canonical edge list.
    pub id: usize,
    pub from: String,
    pub to: String,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub stats: GraphSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub max_in_degree: usize,
}

// ============================================================================
// Visibility Delta
// ============================================================================

/// Show/hide sets emitted after each click transition. The network renderer
/// applies these verbatim; it holds no adjacency logic of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDelta {
    pub show_nodes: Vec<String>,
    pub hide_nodes: Vec<String>,
    pub show_edges: Vec<usize>,
    pub hide_edges: Vec<usize>,
}

impl VisibilityDelta {
    pub fn is_empty(&self) -> bool {
        self.show_nodes.is_empty()
            && self.hide_nodes.is_empty()
            && self.show_edges.is_empty()
            && self.hide_edges.is_empty()
    }
}

/// Body of `POST /api/graph/click`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickRequest {
    pub id: String,
}

// ============================================================================
// Flow Diagram Payload
// ============================================================================

/// Two-stage flow (Page -> Anchor Text -> Destination) in index form for the
/// Sankey renderer: `sources[i] -> targets[i]` carries `values[i]` units,
/// indices point into `labels`. Layout geometry is the renderer's problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDiagram {
    pub labels: Vec<String>,
    pub sources: Vec<usize>,
    pub targets: Vec<usize>,
    pub values: Vec<usize>,
}
