//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the small API surface and the Leptos SSR app under one Axum router,
//! then wraps the whole thing in the route guard so every request, including
//! fallback and static routes, is classified before anything renders.

pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::guard::middleware::route_guard;
use crate::state::AppState;

/// API routes. All live under bypassed prefixes, so the guard lets them through.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/session", get(session::session_status))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Wrap `router` in the route guard and request tracing.
pub fn guarded(router: Router, state: &AppState) -> Router {
    router
        .layer(axum::middleware::from_fn_with_state(state.guard.clone(), route_guard))
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + SSR pages + the `/pkg` bundle, guarded.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));
    Ok(guarded(app, &state))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
