//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no API. It renders the Leptos shell for every app route,
//! serves the compiled bundle under `/pkg`, falls back to the public
//! directory for images and icons, and answers `/healthz` for probes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::errors::LeptosConfigError;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Load Leptos options from `path`, or from the cargo-leptos environment
/// when `None`.
///
/// # Errors
///
/// Returns the Leptos error when the configuration is missing or malformed.
pub fn leptos_options(path: Option<&str>) -> Result<LeptosOptions, LeptosConfigError> {
    Ok(get_configuration(path)?.leptos_options)
}

/// Leptos SSR app plus static assets and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, LeptosConfigError> {
    let leptos_options = leptos_options(None)?;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
