use std::fs;

use acenodes_common::routes::Page;
use acenodes_server::{create_router, AppState, ServerError};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

const SHELL: &str = "<!doctype html><html><body><div id=\"main\"></div></body></html>";
const CSS: &str = "body { margin: 0; }";

fn dist_with_bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), SHELL).unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("main-1a2b.css"), CSS).unwrap();
    dir
}

fn router(dist: &TempDir) -> Router {
    create_router(AppState::load(dist.path()).unwrap())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_reports_version_and_pages() {
    let dist = dist_with_bundle();
    let response = get(router(&dist), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["pages"], 10);
}

#[tokio::test]
async fn test_every_page_gets_shell() {
    let dist = dist_with_bundle();
    for page in Page::ALL {
        let response = get(router(&dist), page.path()).await;
        assert_eq!(response.status(), StatusCode::OK, "{page}");
        assert_eq!(body_text(response).await, SHELL);
    }
}

#[tokio::test]
async fn test_trailing_slash_and_query_resolve_to_page() {
    let dist = dist_with_bundle();
    for uri in ["/faq/", "/terms/sla/", "/contact?ref=discord"] {
        let response = get(router(&dist), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_text(response).await, SHELL);
    }
}

#[tokio::test]
async fn test_asset_served_from_dist() {
    let dist = dist_with_bundle();
    let response = get(router(&dist), "/assets/main-1a2b.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, CSS);
}

#[tokio::test]
async fn test_unknown_route_gets_shell_with_404() {
    let dist = dist_with_bundle();
    for uri in ["/pricing", "/terms/refunds", "/assets/missing.js"] {
        let response = get(router(&dist), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(response).await, SHELL);
    }
}

#[test]
fn test_load_requires_index() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppState::load(dir.path()).unwrap_err();
    assert!(matches!(err, ServerError::MissingIndex(_)));
}

#[test]
fn test_load_requires_dist_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppState::load(dir.path().join("dist")).unwrap_err();
    assert!(matches!(err, ServerError::MissingDist(_)));
    assert!(err.to_string().contains("dist"));
}
