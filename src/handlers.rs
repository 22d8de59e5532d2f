//! HTTP route handlers for the web application.
//!
//! This module contains all the route handlers: the dashboard, the CSV
//! upload, the network map, the per-page flow explorer, the raw data table,
//! and the JSON APIs the renderers consume.

use crate::flow::flow_for_page;
use crate::graph::network_payload;
use crate::isolate::IsolationController;
use crate::models::ClickRequest;
use crate::normalize::normalize;
use crate::stats;
use crate::templates::{
    bar_list, base_html, html_escape, metric_cards, network_css, notice, render_flow_js,
    render_network_js, upload_form,
};
use crate::{AppState, Session};
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

// ============================================================================
// Dashboard
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let guard = state.session.lock().expect("session lock poisoned");

    let session = match guard.as_ref() {
        Some(s) => s,
        None => return Html(base_html("Load a file", &upload_form(None), None)),
    };

    if session.graph.is_empty() {
        let content = format!(
            "{}{}",
            notice("warn", "No links found in the uploaded file."),
            upload_form(None)
        );
        return Html(base_html("No links found", &content, Some(&session.filename)));
    }

    let edges = session.graph.edges();
    let headline = stats::headline(edges);

    let content = format!(
        r#"<h1>Internal Linking Dashboard</h1>
        {metrics}
        <div class="chart-grid">
            {out_bars}
            {in_bars}
        </div>
        {anchor_bars}
        <p>
            <a class="btn" href="/network">Network map</a>
            <a class="btn" href="/flow">Flow explorer</a>
            <a class="btn" href="/data">Raw data</a>
        </p>"#,
        metrics = metric_cards(&headline),
        out_bars = bar_list(
            "Top pages by outgoing links",
            "",
            &stats::top_sources(edges, 15),
            Some("/flow?page="),
        ),
        in_bars = bar_list(
            "Top pages by incoming links",
            "incoming",
            &stats::top_targets(edges, 15),
            None,
        ),
        anchor_bars = bar_list(
            "Most used anchor texts",
            "anchor",
            &stats::top_anchors(edges, 20),
            None,
        ),
    );

    Html(base_html("Dashboard", &content, Some(&session.filename)))
}

// ============================================================================
// Upload
// ============================================================================

pub async fn upload(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let mut filename = String::new();
    let mut data = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or("links.csv").to_string();
            match field.bytes().await {
                Ok(bytes) => data = bytes.to_vec(),
                Err(e) => {
                    return upload_error(&format!("Failed to read file: {}", e)).into_response()
                }
            }
            break;
        }
    }

    if data.is_empty() {
        return upload_error("No file uploaded").into_response();
    }

    let fingerprint = AppState::fingerprint(&data);
    {
        let guard = state.session.lock().expect("session lock poisoned");
        if let Some(session) = guard.as_ref() {
            if session.fingerprint == fingerprint {
                tracing::info!(%filename, "identical upload, keeping current graph");
                return Redirect::to("/").into_response();
            }
        }
    }

    let edges = match normalize(&data) {
        Ok(edges) => edges,
        Err(e) => {
            tracing::warn!(%filename, error = %e, "upload rejected");
            return upload_error(&e.to_string()).into_response();
        }
    };
    let edge_count = edges.len();

    let session = match Session::new(filename.clone(), fingerprint, edges) {
        Ok(s) => s,
        // Unreachable from normalized input; a defect, not a user error.
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    tracing::info!(
        %filename,
        edges = edge_count,
        nodes = session.graph.node_count(),
        "dataset loaded"
    );

    *state.session.lock().expect("session lock poisoned") = Some(session);
    Redirect::to("/").into_response()
}

fn upload_error(message: &str) -> Html<String> {
    Html(base_html("Load a file", &upload_form(Some(message)), None))
}

// ============================================================================
// Network Map
// ============================================================================

pub async fn network(State(state): State<Arc<AppState>>) -> Response {
    let mut guard = state.session.lock().expect("session lock poisoned");

    let session = match guard.as_mut() {
        Some(s) => s,
        None => return no_dataset_page("Network map"),
    };

    if session.graph.is_empty() {
        let content = notice("warn", "No links found in the uploaded file.");
        return Html(base_html("Network map", &content, Some(&session.filename))).into_response();
    }

    // A fresh render always starts at the overview.
    session.controller = IsolationController::new();

    let payload = network_payload(&session.graph);
    let graph_json = serde_json::to_string(&payload).unwrap_or_else(|_| "{}".to_string());

    let content = format!(
        r#"<style>{css}</style>
        <h1>Interactive Network Map</h1>
        <p>Click a node to isolate it and see only the pages it links to.
        Click it again to return to the overview.</p>
        <div class="graph-stats">
            <span><strong>{nodes}</strong> pages</span>
            <span><strong>{edges}</strong> links</span>
            <span>max in-degree: <strong>{max_in}</strong></span>
        </div>
        <div class="graph-container" id="graph-container"></div>
        {script}"#,
        css = network_css(),
        nodes = payload.stats.total_nodes,
        edges = payload.stats.total_edges,
        max_in = payload.stats.max_in_degree,
        script = render_network_js(&graph_json),
    );

    Html(base_html("Network map", &content, Some(&session.filename))).into_response()
}

pub async fn api_graph(State(state): State<Arc<AppState>>) -> Response {
    let guard = state.session.lock().expect("session lock poisoned");
    match guard.as_ref() {
        Some(session) => axum::Json(network_payload(&session.graph)).into_response(),
        None => (StatusCode::NOT_FOUND, "No dataset loaded").into_response(),
    }
}

pub async fn api_click(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<ClickRequest>,
) -> Response {
    let mut guard = state.session.lock().expect("session lock poisoned");
    match guard.as_mut() {
        Some(session) => {
            let delta = session.controller.on_node_click(&session.graph, &body.id);
            axum::Json(delta).into_response()
        }
        None => (StatusCode::CONFLICT, "No dataset loaded").into_response(),
    }
}

// ============================================================================
// Flow Explorer
// ============================================================================

#[derive(Deserialize)]
pub struct FlowQuery {
    pub page: Option<String>,
}

pub async fn flow(
    Query(query): Query<FlowQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let guard = state.session.lock().expect("session lock poisoned");

    let session = match guard.as_ref() {
        Some(s) => s,
        None => return no_dataset_page("Flow explorer"),
    };

    let edges = session.graph.edges();
    let pages = stats::source_pages(edges);
    if pages.is_empty() {
        let content = notice("warn", "No links found in the uploaded file.");
        return Html(base_html("Flow explorer", &content, Some(&session.filename)))
            .into_response();
    }

    let selected = query
        .page
        .as_deref()
        .filter(|p| pages.iter().any(|q| q == p))
        .unwrap_or_else(|| pages[0].as_str());

    let options: String = pages
        .iter()
        .map(|p| {
            let sel = if p == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                html_escape(p),
                sel,
                html_escape(p)
            )
        })
        .collect();

    let diagram = match flow_for_page(edges, selected) {
        Some(f) => f,
        None => {
            let content = notice("warn", "No outgoing links found for the selected page.");
            return Html(base_html("Flow explorer", &content, Some(&session.filename)))
                .into_response();
        }
    };
    let flow_json = serde_json::to_string(&diagram).unwrap_or_else(|_| "{}".to_string());

    let content = format!(
        r#"<h1>Link Flow Explorer</h1>
        <p>Pick a source page to see where it links and with which anchor texts.</p>
        <form class="flow-controls" action="/flow" method="get">
            <select name="page" onchange="this.form.submit()">{options}</select>
            <button class="btn" type="submit">Show</button>
        </form>
        <h2>Flow from {page}</h2>
        <div class="flow-container" id="flow-container"></div>
        {script}"#,
        options = options,
        page = html_escape(selected),
        script = render_flow_js(&flow_json),
    );

    Html(base_html("Flow explorer", &content, Some(&session.filename))).into_response()
}

pub async fn api_flow(
    Query(query): Query<FlowQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let guard = state.session.lock().expect("session lock poisoned");

    let session = match guard.as_ref() {
        Some(s) => s,
        None => return (StatusCode::NOT_FOUND, "No dataset loaded").into_response(),
    };

    let page = match query.page.as_deref() {
        Some(p) => p,
        None => return (StatusCode::BAD_REQUEST, "Missing ?page=").into_response(),
    };

    match flow_for_page(session.graph.edges(), page) {
        Some(diagram) => axum::Json(diagram).into_response(),
        None => (StatusCode::NOT_FOUND, "No outgoing links for that page").into_response(),
    }
}

// ============================================================================
// Raw Data Table
// ============================================================================

pub async fn data(State(state): State<Arc<AppState>>) -> Response {
    let guard = state.session.lock().expect("session lock poisoned");

    let session = match guard.as_ref() {
        Some(s) => s,
        None => return no_dataset_page("Raw data"),
    };

    let edges = session.graph.edges();
    if edges.is_empty() {
        let content = notice("warn", "No links found in the uploaded file.");
        return Html(base_html("Raw data", &content, Some(&session.filename))).into_response();
    }

    let mut rows = String::new();
    for edge in edges {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            html_escape(&edge.source),
            html_escape(&edge.target),
            html_escape(&edge.anchor_text),
        ));
    }

    let content = format!(
        r#"<h1>Raw Link Data</h1>
        <p>{count} links</p>
        <table class="edge-table">
            <thead><tr><th>Source</th><th>Destination</th><th>Anchor text</th></tr></thead>
            <tbody>{rows}</tbody>
        </table>"#,
        count = edges.len(),
        rows = rows,
    );

    Html(base_html("Raw data", &content, Some(&session.filename))).into_response()
}

// ============================================================================
// Shared
// ============================================================================

fn no_dataset_page(title: &str) -> Response {
    let content = format!(
        "{}{}",
        notice("", "Load a CSV file first to explore its link graph."),
        upload_form(None)
    );
    Html(base_html(title, &content, None)).into_response()
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
