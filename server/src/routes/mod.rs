//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the page routes, `/pkg` serves the compiled WASM/JS/CSS
//! bundle, and everything else falls through to the static assets directory
//! (gallery images, QR code) via `site::site_routes`.

pub mod site;

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Leptos SSR frontend plus health check and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(site::site_routes(&config.assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
