//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router stitches together the `/api` reverse proxy, Leptos SSR
//! of the client application, and static asset serving, with the edge gate
//! layered in front of all of it.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::gate;
use crate::proxy::{self, ProxyState};

/// Full edge-host router: proxy + SSR + assets behind the gate.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(proxy_state: ProxyState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let api_router = Router::new()
        .route("/api/{*path}", any(proxy::proxy))
        .with_state(proxy_state);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_router
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .route("/healthz", get(healthz))
        .layer(axum::middleware::from_fn(gate::gate))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
