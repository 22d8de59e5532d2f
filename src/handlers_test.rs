//! Handler smoke tests driven through the assembled router.
//!
//! Each test builds the real router over a fresh `AppState`, uploads a small
//! in-memory CSV over multipart, and asserts on the rendered HTML or the
//! JSON the renderer APIs return.

use super::*;
use crate::models::VisibilityDelta;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

fn app() -> Router {
    let state = Arc::new(AppState::new());
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/network", get(network))
        .route("/api/graph/click", post(api_click))
        .with_state(state)
}

const BOUNDARY: &str = "csv-upload-test";

fn upload_request(csv: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"links.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n{csv}\r\n--{b}--\r\n",
        b = BOUNDARY,
        csv = csv
    );
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Upload and Dashboard
// ============================================================================

#[tokio::test]
async fn upload_then_dashboard_shows_the_dataset() {
    let app = app();
    let csv = "Address,URL 1,Anchor 1\n/home,/blog,read the blog\n/blog,/home,back home\n";

    let resp = app.clone().oneshot(upload_request(csv)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let html = body_text(app.oneshot(get_request("/")).await.unwrap()).await;
    assert!(html.contains("Internal Linking Dashboard"));
    assert!(html.contains("links.csv"));
    assert!(html.contains("read the blog"));
}

#[tokio::test]
async fn failed_parse_reports_its_cause_on_the_upload_page() {
    // Two columns match neither layout.
    let resp = app()
        .oneshot(upload_request("source,other\n/a,/b\n"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("unrecognized CSV layout"));
    assert!(html.contains("Load a link export"));
}

#[tokio::test]
async fn dataset_without_links_renders_the_no_links_state() {
    let app = app();
    let csv = "Address,URL 1,Anchor 1\n/home,,\n";

    let resp = app.clone().oneshot(upload_request(csv)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let html = body_text(app.clone().oneshot(get_request("/")).await.unwrap()).await;
    assert!(html.contains("No links found"));

    let html = body_text(app.oneshot(get_request("/network")).await.unwrap()).await;
    assert!(html.contains("No links found"));
}

// ============================================================================
// Click API
// ============================================================================

fn click_request(id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/graph/click")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"id":"{}"}}"#, id)))
        .unwrap()
}

#[tokio::test]
async fn click_api_emits_the_isolation_delta() {
    let app = app();
    let csv = "Address,URL 1,Anchor 1\n/home,/blog,blog\n/other,/home,home\n";
    app.clone().oneshot(upload_request(csv)).await.unwrap();

    let resp = app.oneshot(click_request("/home")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let delta: VisibilityDelta = serde_json::from_str(&body_text(resp).await).unwrap();
    // Isolating /home keeps its successor /blog and hides the rest.
    assert_eq!(delta.hide_nodes, vec!["/other".to_string()]);
    assert!(delta.show_nodes.is_empty());
    assert_eq!(delta.show_edges, vec![0]);
    assert!(delta.hide_edges.is_empty());
}

#[tokio::test]
async fn click_without_a_dataset_is_a_conflict() {
    let resp = app().oneshot(click_request("/home")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
