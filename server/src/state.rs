//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the route guard so the session-status endpoint observes the
//! credential through the same lookup the guard middleware uses.

use crate::config::ServerConfig;
use crate::guard::RouteGuard;
use crate::guard::credential::CookieCredentialLookup;

/// Clone is required by Axum; the guard is Arc-wrapped internally.
#[derive(Clone)]
pub struct AppState {
    pub guard: RouteGuard,
}

impl AppState {
    pub fn new(guard: RouteGuard) -> Self {
        Self { guard }
    }

    /// State for a cookie-backed guard built from configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        let lookup = CookieCredentialLookup::new(config.session_cookie.clone());
        Self::new(RouteGuard::new(config.guard_policy(), lookup))
    }
}
