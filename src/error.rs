//! Error types for CSV normalization and graph queries.

use thiserror::Error;

/// Errors raised while turning an uploaded CSV into the canonical edge list.
///
/// A `Format` error is fatal to the upload: no partial graph is built and the
/// cause is surfaced on the upload page. Reader-level failures are wrapped so
/// they can be reported the same way.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("unrecognized CSV layout: {0}")]
    Format(String),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised by the link graph.
///
/// `UnknownNode` is a contract violation (the caller queried an identifier
/// that is not in the node set) and is never shown to the user; the click
/// handler screens ids before querying the graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid edge: empty endpoint ({source_id:?} -> {target:?})")]
    InvalidEdge { source_id: String, target: String },
    #[error("unknown node: {0}")]
    UnknownNode(String),
}
