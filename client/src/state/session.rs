//! Client-side session flag for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server route guard is the authority on whether a request carries a
//! session credential. This store is a convenience mirror of that fact for
//! client-rendered pages that have no request of their own to inspect, such
//! as the entry page at `/`.
//!
//! LIFECYCLE
//! =========
//! Created once by the app shell (`SessionStore::restore`), provided as
//! `RwSignal<SessionStore>` context, mutated by login/logout flows and by
//! reconciliation against `/api/session`. Never torn down.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::session_persistence;

/// Authentication flag mirrored from the session credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    authenticated: bool,
}

impl SessionStore {
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }

    /// Build the store at app start from the persisted flag.
    ///
    /// Outside the browser, or when nothing usable is stored, the store
    /// starts unauthenticated.
    #[must_use]
    pub fn restore() -> Self {
        Self::new(session_persistence::load_flag().unwrap_or(false))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Called by the login flow once the credential has been issued.
    pub fn mark_authenticated(&mut self) {
        self.set(true);
    }

    /// Called by the logout flow once the credential has been cleared.
    pub fn mark_unauthenticated(&mut self) {
        self.set(false);
    }

    /// Align the flag with the server's observation of the credential.
    ///
    /// Returns `true` when the flag changed.
    pub fn reconcile(&mut self, credential_present: bool) -> bool {
        if self.authenticated == credential_present {
            return false;
        }
        self.set(credential_present);
        true
    }

    fn set(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        session_persistence::save_flag(authenticated);
    }
}
