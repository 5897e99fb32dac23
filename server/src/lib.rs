//! Static host for the compiled AceNodes UI bundle.
//!
//! Every known site route is answered with the single-page shell so deep links
//! work on reload. Other paths are looked up in the dist directory; anything
//! missing there gets the shell with a 404 status and the UI renders its
//! not-found page.

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use acenodes_common::routes::Page;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::ServerError;

/// Immutable per-process state shared by all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    dist_dir: PathBuf,
    index_html: String,
}

impl AppState {
    /// Check the dist directory and cache its `index.html`.
    pub fn load(dist_dir: impl Into<PathBuf>) -> Result<Self, ServerError> {
        let dist_dir = dist_dir.into();
        if !dist_dir.is_dir() {
            return Err(ServerError::MissingDist(dist_dir));
        }

        let index_path = dist_dir.join("index.html");
        let index_html = match std::fs::read_to_string(&index_path) {
            Ok(html) => html,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServerError::MissingIndex(dist_dir));
            }
            Err(source) => {
                return Err(ServerError::Io {
                    path: index_path,
                    source,
                });
            }
        };

        Ok(Self {
            dist_dir,
            index_html,
        })
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    fn shell(&self, status: StatusCode) -> Response {
        (status, Html(self.index_html.clone())).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    pages: usize,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(site_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pages: Page::ALL.len(),
    })
}

async fn site_handler(State(state): State<Arc<AppState>>, req: Request) -> Response {
    if let Some(page) = Page::from_path(req.uri().path()) {
        tracing::debug!("serving shell for {}", page);
        return state.shell(StatusCode::OK);
    }

    match ServeDir::new(&state.dist_dir).oneshot(req).await {
        Ok(res) if res.status() == StatusCode::NOT_FOUND => state.shell(StatusCode::NOT_FOUND),
        Ok(res) => res.map(Body::new),
        Err(never) => match never {},
    }
}
