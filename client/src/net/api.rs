//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed status fetch
//! leaves the session flag untouched rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SessionStatus;

/// Session-status endpoint served by the route-guard host.
pub const SESSION_ENDPOINT: &str = "/api/session";

/// Fetch the server's view of the session credential from `/api/session`.
/// Returns `None` on network failure, non-2xx status, or on the server.
pub async fn fetch_session_status() -> Option<SessionStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("session status request failed: {}", resp.status());
            return None;
        }
        resp.json::<SessionStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
