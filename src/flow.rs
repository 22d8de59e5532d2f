//! Per-page flow diagram: Page -> Anchor Text -> Destination.
//!
//! A stateless transform over the edge list. For one chosen source page it
//! produces the label list and unit-valued links the Sankey renderer needs;
//! the renderer lays them out.

use crate::models::{Edge, FlowDiagram};
use std::collections::HashMap;

/// Build the two-stage flow for `page`, or `None` when the page has no
/// outgoing links (the caller renders an explicit notice for that).
///
/// Labels are interned in first-seen order: the page itself, then anchors,
/// then destinations. An anchor that reads the same as a destination shares
/// one label, so flows through it visibly converge. Every link carries one
/// unit per edge occurrence; duplicate links are kept because they show weight.
pub fn flow_for_page(edges: &[Edge], page: &str) -> Option<FlowDiagram> {
    let rows: Vec<&Edge> = edges.iter().filter(|e| e.source == page).collect();
    if rows.is_empty() {
        return None;
    }

    let mut labels: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let page_idx = intern(&mut labels, &mut index, page);
    for edge in &rows {
        intern(&mut labels, &mut index, &edge.anchor_text);
    }
    for edge in &rows {
        intern(&mut labels, &mut index, &edge.target);
    }

    let mut sources = Vec::with_capacity(rows.len() * 2);
    let mut targets = Vec::with_capacity(rows.len() * 2);
    for edge in &rows {
        let anchor_idx = index[&edge.anchor_text];
        sources.push(page_idx);
        targets.push(anchor_idx);
    }
    for edge in &rows {
        let anchor_idx = index[&edge.anchor_text];
        let target_idx = index[&edge.target];
        sources.push(anchor_idx);
        targets.push(target_idx);
    }

    let values = vec![1; sources.len()];
    Some(FlowDiagram {
        labels,
        sources,
        targets,
        values,
    })
}

fn intern(labels: &mut Vec<String>, index: &mut HashMap<String, usize>, label: &str) -> usize {
    if let Some(&i) = index.get(label) {
        return i;
    }
    let i = labels.len();
    labels.push(label.to_string());
    index.insert(label.to_string(), i);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(s: &str, t: &str, a: &str) -> Edge {
        Edge::new(s, t, a)
    }

    #[test]
    fn builds_two_stage_links_per_occurrence() {
        let edges = vec![
            edge("/home", "/blog", "read the blog"),
            edge("/home", "/about", "about us"),
            edge("/other", "/home", "home"),
        ];
        let flow = flow_for_page(&edges, "/home").unwrap();

        assert_eq!(
            flow.labels,
            vec!["/home", "read the blog", "about us", "/blog", "/about"]
        );
        // Stage one (page -> anchor), then stage two (anchor -> destination).
        assert_eq!(flow.sources, vec![0, 0, 1, 2]);
        assert_eq!(flow.targets, vec![1, 2, 3, 4]);
        assert_eq!(flow.values, vec![1, 1, 1, 1]);
    }

    #[test]
    fn anchor_matching_destination_shares_a_label() {
        let edges = vec![edge("/home", "/blog", "/blog")];
        let flow = flow_for_page(&edges, "/home").unwrap();
        assert_eq!(flow.labels, vec!["/home", "/blog"]);
        assert_eq!(flow.sources, vec![0, 1]);
        assert_eq!(flow.targets, vec![1, 1]);
    }

    #[test]
    fn page_without_outgoing_links_is_none() {
        let edges = vec![edge("/home", "/blog", "blog")];
        assert!(flow_for_page(&edges, "/blog").is_none());
        assert!(flow_for_page(&edges, "/missing").is_none());
    }

    #[test]
    fn duplicate_edges_stay_distinct_flows() {
        let edges = vec![
            edge("/home", "/blog", "blog"),
            edge("/home", "/blog", "blog"),
        ];
        let flow = flow_for_page(&edges, "/home").unwrap();
        assert_eq!(flow.sources.len(), 4);
        assert_eq!(flow.values.iter().sum::<usize>(), 4);
    }
}
