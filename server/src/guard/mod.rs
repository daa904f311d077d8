//! Session-aware route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per incoming request before any page renders and turns
//! (path, credential presence) into a `RoutingDecision`:
//!
//! 1. Unclassified path -> allow.
//! 2. Protected path without credential -> redirect to the login path.
//! 3. Login path with credential -> redirect to the dashboard root.
//! 4. Anything else -> allow.
//!
//! DESIGN
//! ======
//! `GuardPolicy` is the pure decision function. `RouteGuard` pairs it with a
//! `CredentialLookup` and is shared read-only across requests. The guard only
//! observes session state; login and logout flows are the sole writers.

pub mod credential;
pub mod middleware;
pub mod path;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::Arc;

use axum::http::HeaderMap;
use client::routes::{DASHBOARD_ROOT, LOGIN_PATH};

use self::credential::{Credential, CredentialLookup};
use self::path::{PathClass, PathRules};

// =============================================================================
// SESSION STATE
// =============================================================================

/// Per-request projection of credential presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn from_credential(credential: Option<&Credential>) -> Self {
        if credential.is_some() { Self::Authenticated } else { Self::Unauthenticated }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutingDecision {
    Allow,
    RedirectTo(String),
}

impl RoutingDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(target) => Some(target),
        }
    }
}

/// Path rules plus the two redirect targets.
#[derive(Clone, Debug)]
pub struct GuardPolicy {
    rules: PathRules,
    login_path: String,
    dashboard_root: String,
}

impl GuardPolicy {
    pub fn new(rules: PathRules, login_path: impl Into<String>, dashboard_root: impl Into<String>) -> Self {
        Self { rules, login_path: login_path.into(), dashboard_root: dashboard_root.into() }
    }

    /// Decide for one request. Deterministic in its inputs.
    pub fn decide(&self, path: &str, session: SessionState) -> RoutingDecision {
        match (self.rules.classify_or_unclassified(path), session) {
            (PathClass::Unclassified, _) => RoutingDecision::Allow,
            (PathClass::Protected, SessionState::Unauthenticated) => {
                RoutingDecision::RedirectTo(self.login_path.clone())
            }
            (PathClass::AuthEntry, SessionState::Authenticated) => {
                RoutingDecision::RedirectTo(self.dashboard_root.clone())
            }
            _ => RoutingDecision::Allow,
        }
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self::new(PathRules::default(), LOGIN_PATH, DASHBOARD_ROOT)
    }
}

// =============================================================================
// ROUTE GUARD
// =============================================================================

/// Decision policy bound to a credential source. Cheap to clone.
#[derive(Clone)]
pub struct RouteGuard {
    policy: Arc<GuardPolicy>,
    lookup: Arc<dyn CredentialLookup>,
}

impl RouteGuard {
    pub fn new(policy: GuardPolicy, lookup: impl CredentialLookup + 'static) -> Self {
        Self { policy: Arc::new(policy), lookup: Arc::new(lookup) }
    }

    /// Session state as observed from the request headers.
    pub fn session_state(&self, headers: &HeaderMap) -> SessionState {
        SessionState::from_credential(self.lookup.lookup(headers).as_ref())
    }

    pub fn evaluate(&self, path: &str, headers: &HeaderMap) -> RoutingDecision {
        self.policy.decide(path, self.session_state(headers))
    }
}
