//! Dashboard statistics: stateless counts over the edge list.
//!
//! Feeds the metric cards and the top-N bar lists on the dashboard page.

use crate::models::Edge;
use std::collections::{BTreeSet, HashMap};

pub struct Headline {
    pub source_pages: usize,
    pub total_links: usize,
    pub target_pages: usize,
}

pub fn headline(edges: &[Edge]) -> Headline {
    let sources: BTreeSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    let targets: BTreeSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    Headline {
        source_pages: sources.len(),
        total_links: edges.len(),
        target_pages: targets.len(),
    }
}

/// Pages with the most outgoing links.
pub fn top_sources(edges: &[Edge], limit: usize) -> Vec<(String, usize)> {
    top_by(edges, limit, |e| Some(e.source.as_str()))
}

/// Pages receiving the most links.
pub fn top_targets(edges: &[Edge], limit: usize) -> Vec<(String, usize)> {
    top_by(edges, limit, |e| Some(e.target.as_str()))
}

/// Most used anchor texts. Blank anchors carry no signal and are skipped.
pub fn top_anchors(edges: &[Edge], limit: usize) -> Vec<(String, usize)> {
    top_by(edges, limit, |e| {
        if e.anchor_text.is_empty() {
            None
        } else {
            Some(e.anchor_text.as_str())
        }
    })
}

/// Distinct source pages, sorted; these are the flow explorer's selector options.
pub fn source_pages(edges: &[Edge]) -> Vec<String> {
    let pages: BTreeSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    pages.into_iter().map(str::to_string).collect()
}

/// Count by key, order by count descending then name ascending so equal
/// counts render stably.
fn top_by<'a, F>(edges: &'a [Edge], limit: usize, key: F) -> Vec<(String, usize)>
where
    F: Fn(&'a Edge) -> Option<&'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for edge in edges {
        if let Some(k) = key(edge) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Edge> {
        vec![
            Edge::new("/home", "/blog", "blog"),
            Edge::new("/home", "/about", "about"),
            Edge::new("/home", "/blog", "the blog"),
            Edge::new("/blog", "/home", "home"),
            Edge::new("/about", "/home", ""),
        ]
    }

    #[test]
    fn headline_counts_distinct_pages_and_all_links() {
        let h = headline(&dataset());
        assert_eq!(h.source_pages, 3);
        assert_eq!(h.total_links, 5);
        assert_eq!(h.target_pages, 3);
    }

    #[test]
    fn top_sources_ranks_by_outgoing_count() {
        let top = top_sources(&dataset(), 2);
        assert_eq!(top[0], ("/home".to_string(), 3));
        // /about and /blog tie at 1; name order breaks the tie.
        assert_eq!(top[1], ("/about".to_string(), 1));
    }

    #[test]
    fn top_targets_counts_incoming_occurrences() {
        let top = top_targets(&dataset(), 10);
        // /blog and /home tie at 2; name order breaks the tie.
        assert_eq!(top[0], ("/blog".to_string(), 2));
        assert_eq!(top[1], ("/home".to_string(), 2));
    }

    #[test]
    fn top_anchors_skips_blank_anchors() {
        let top = top_anchors(&dataset(), 10);
        assert_eq!(top.len(), 4);
        assert!(top.iter().all(|(a, _)| !a.is_empty()));
    }

    #[test]
    fn empty_dataset_yields_zeroes() {
        let h = headline(&[]);
        assert_eq!(h.source_pages, 0);
        assert_eq!(h.total_links, 0);
        assert!(top_sources(&[], 5).is_empty());
        assert!(source_pages(&[]).is_empty());
    }
}
