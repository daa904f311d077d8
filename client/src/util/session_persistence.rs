//! Browser localStorage persistence for the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets the flag survive a page reload so the entry page can redirect before
//! the session-status round-trip completes. The stored value is only a hint;
//! reconciliation against `/api/session` has the final word.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native test
//! builds no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_persistence_test.rs"]
mod session_persistence_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "hydrate"))]
const STORAGE_KEY: &str = "rental_admin_session";

/// Stored shape of the session flag.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedSession {
    authenticated: bool,
}

#[cfg(any(test, feature = "hydrate"))]
fn encode(authenticated: bool) -> Option<String> {
    serde_json::to_string(&PersistedSession { authenticated }).ok()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode(raw: &str) -> Option<bool> {
    serde_json::from_str::<PersistedSession>(raw)
        .ok()
        .map(|p| p.authenticated)
}

/// Read the persisted flag. `None` when absent, unreadable, or off-browser.
pub fn load_flag() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the flag for the next page load.
pub fn save_flag(authenticated: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Some(raw) = encode(authenticated) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authenticated;
    }
}
