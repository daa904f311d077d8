//! Session-status endpoint.
//!
//! The credential cookie is HTTP-only, so client code cannot test for it.
//! `GET /api/session` reports the guard's view instead, letting the client
//! session store reconcile its flag.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use client::net::types::SessionStatus;

use crate::state::AppState;

/// `GET /api/session` — `{"authenticated": bool}` for the request's credential.
pub async fn session_status(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatus> {
    let session = state.guard.session_state(&headers);
    Json(SessionStatus { authenticated: session.is_authenticated() })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
