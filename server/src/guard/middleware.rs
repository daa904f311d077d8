//! Axum middleware applying the route guard to every request.
//!
//! ERROR HANDLING
//! ==============
//! The guard gates every navigation, so it must never be the reason a page
//! fails to load. A panic during evaluation is caught, logged, and the request
//! is allowed through.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::panic::{AssertUnwindSafe, catch_unwind};

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::{RouteGuard, RoutingDecision};

/// Install with `axum::middleware::from_fn_with_state(guard, route_guard)`.
pub async fn route_guard(State(guard): State<RouteGuard>, req: Request, next: Next) -> Response {
    let decision = evaluate_fail_open(&guard, req.uri().path(), req.headers());
    tracing::debug!(path = %req.uri().path(), allow = decision.is_allow(), "route guard decision");

    match decision.target() {
        None => next.run(req).await,
        Some(target) => {
            tracing::debug!(path = %req.uri().path(), %target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

/// Run the guard, degrading any panic to `Allow`.
pub(crate) fn evaluate_fail_open(guard: &RouteGuard, path: &str, headers: &HeaderMap) -> RoutingDecision {
    match catch_unwind(AssertUnwindSafe(|| guard.evaluate(path, headers))) {
        Ok(decision) => decision,
        Err(_) => {
            tracing::error!(%path, "route guard evaluation panicked; allowing request");
            RoutingDecision::Allow
        }
    }
}
