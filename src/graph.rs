//! The directed link graph built from the canonical edge list.
//!
//! The graph owns the edge list and derives three read-only indexes: the
//! node set with per-node in-degree, the outgoing-edge index (edge ids per
//! source node), and the adjacency index (distinct successors per node).
//! All three are built once per upload and never mutated afterwards; the
//! isolation controller and the renderers only read them.

use crate::error::GraphError;
use crate::models::{Edge, GraphSummary, NetworkEdge, NetworkGraph, NetworkNode};
use std::collections::{HashMap, HashSet};

// ============================================================================
// Link Graph
// ============================================================================

#[derive(Debug, Clone)]
pub struct LinkGraph {
    edges: Vec<Edge>,
    /// Every node appears here, with 0 for nodes nothing links to.
    in_degree: HashMap<String, usize>,
    /// Node -> ids (edge-list indices) of its outgoing edges.
    outgoing: HashMap<String, Vec<usize>>,
    /// Node -> distinct successor set.
    adjacency: HashMap<String, HashSet<String>>,
}

impl LinkGraph {
    /// Build the graph from a normalized edge list.
    ///
    /// The normalizer never emits blank endpoints, so `InvalidEdge` here
    /// means a caller bypassed it; the whole build is rejected rather than
    /// silently producing a graph with phantom nodes. An empty edge list
    /// yields an empty graph. Self-loops count in both the node's outgoing
    /// set and its own in-degree.
    pub fn build(edges: Vec<Edge>) -> Result<Self, GraphError> {
        for edge in &edges {
            if edge.source.is_empty() || edge.target.is_empty() {
                return Err(GraphError::InvalidEdge {
                    source_id: edge.source.clone(),
                    target: edge.target.clone(),
                });
            }
        }

        let mut in_degree: HashMap<String, usize> = HashMap::new();
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();

        for (id, edge) in edges.iter().enumerate() {
            in_degree.entry(edge.source.clone()).or_insert(0);
            *in_degree.entry(edge.target.clone()).or_insert(0) += 1;

            outgoing.entry(edge.source.clone()).or_default().push(id);
            outgoing.entry(edge.target.clone()).or_default();

            adjacency
                .entry(edge.source.clone())
                .or_default()
                .insert(edge.target.clone());
            adjacency.entry(edge.target.clone()).or_default();
        }

        Ok(LinkGraph {
            edges,
            in_degree,
            outgoing,
            adjacency,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.in_degree.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.in_degree.keys().map(String::as_str)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// How many edges point at `id`. 0 for nodes with no incoming edges.
    pub fn in_degree(&self, id: &str) -> Result<usize, GraphError> {
        self.in_degree
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Ids of the edges leaving `id`, in edge-list order.
    pub fn outgoing(&self, id: &str) -> Result<&[usize], GraphError> {
        self.outgoing
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Distinct nodes reachable from `id` by exactly one outgoing edge.
    /// Empty for leaf nodes.
    pub fn adjacency(&self, id: &str) -> Result<&HashSet<String>, GraphError> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}

// ============================================================================
// Renderer Payload
// ============================================================================

/// Serialize the graph for the network canvas. Nodes are sorted by id so the
/// payload is deterministic; edge ids are edge-list indices, which is what
/// the visibility deltas refer to.
pub fn network_payload(graph: &LinkGraph) -> NetworkGraph {
    let mut nodes: Vec<NetworkNode> = graph
        .nodes()
        .map(|id| {
            let in_degree = graph.in_degree(id).unwrap_or(0);
            NetworkNode {
                id: id.to_string(),
                value: 10 + in_degree * 3,
                in_degree,
                title: format!("{} ({} incoming links)", id, in_degree),
            }
        })
        .collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    let edges: Vec<NetworkEdge> = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(id, e)| NetworkEdge {
            id,
            from: e.source.clone(),
            to: e.target.clone(),
            anchor: e.anchor_text.clone(),
        })
        .collect();

    let max_in_degree = nodes.iter().map(|n| n.in_degree).max().unwrap_or(0);

    NetworkGraph {
        stats: GraphSummary {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            max_in_degree,
        },
        nodes,
        edges,
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;
