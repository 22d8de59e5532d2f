//! Linkmap library - internal link graph explorer.
//!
//! Ingests a CSV export of a site's internal links (interleaved or blocked
//! column layout), normalizes it into one canonical edge list, builds a
//! directed link graph, and serves it for visual exploration: a dashboard
//! with link metrics, a per-page flow diagram, and an interactive network
//! map with click-to-isolate behavior.
//!
//! Modules:
//! - `models`: canonical edge and the serialized renderer payloads
//! - `error`: normalization and graph error taxonomy
//! - `normalize`: layout detection and the two CSV parsers
//! - `graph`: the directed link graph with in-degree and adjacency indexes
//! - `isolate`: the click-to-isolate state machine
//! - `flow`: per-page Page -> Anchor -> Destination flow builder
//! - `stats`: dashboard metrics
//! - `templates`: HTML/CSS/JS generation
//! - `handlers`: HTTP route handlers

use sha2::{Digest, Sha256};
use std::sync::Mutex;

pub mod error;
pub mod flow;
pub mod graph;
pub mod handlers;
pub mod isolate;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod templates;

// Re-export commonly used types
pub use error::{GraphError, NormalizeError};
pub use flow::flow_for_page;
pub use graph::{network_payload, LinkGraph};
pub use isolate::{render_instructions, IsolationController, RenderInstructions, VisibilityState};
pub use models::{
    ClickRequest, Edge, FlowDiagram, GraphSummary, NetworkEdge, NetworkGraph, NetworkNode,
    VisibilityDelta,
};
pub use normalize::{detect_layout, normalize, LayoutKind};
pub use stats::{headline, source_pages, top_anchors, top_sources, top_targets, Headline};

// ============================================================================
// Configuration
// ============================================================================

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Env var overriding the bind address.
pub const ADDR_ENV: &str = "LINKMAP_ADDR";

// ============================================================================
// Session
// ============================================================================

/// One loaded dataset: the graph built from it plus the view state of the
/// network map. Replaced wholesale on upload, never persisted; restarting
/// the server starts from the empty state again.
pub struct Session {
    /// sha256 of the uploaded bytes; identical re-uploads are skipped.
    pub fingerprint: String,
    pub filename: String,
    pub graph: LinkGraph,
    pub controller: IsolationController,
}

impl Session {
    pub fn new(filename: String, fingerprint: String, edges: Vec<Edge>) -> Result<Self, GraphError> {
        Ok(Session {
            fingerprint,
            filename,
            graph: LinkGraph::build(edges)?,
            controller: IsolationController::new(),
        })
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Shared server state: at most one dataset at a time. The mutex serializes
/// click events and uploads, which is all the concurrency model the view
/// needs. The graph is immutable once built; only the controller mutates.
pub struct AppState {
    pub session: Mutex<Option<Session>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: Mutex::new(None),
        }
    }

    /// Content digest used to detect re-uploads of the same file.
    pub fn fingerprint(data: &[u8]) -> String {
        let digest = Sha256::digest(data);
        format!("{:x}", digest)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
