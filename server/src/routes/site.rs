//! Health check and static asset fallback.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Page served with `404 Not Found` for paths no route or file matches.
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Routes that need no Leptos configuration: `/healthz` and a fallback
/// serving files from `assets_dir`. Unknown paths get the assets' not-found
/// page with a 404 status.
pub fn site_routes(assets_dir: &Path) -> Router {
    let not_found = ServeFile::new(assets_dir.join(NOT_FOUND_PAGE));
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir).not_found_service(not_found))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
