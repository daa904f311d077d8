//! Session credential lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard only cares whether a credential is present. Reading it sits
//! behind `CredentialLookup` so decision logic can be exercised with a stub
//! instead of real HTTP headers. The guard never writes the cookie: login and
//! logout flows own it.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::fmt;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Opaque session token. Never empty; its value is never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. An empty value is treated as no credential.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Extract the session credential from request headers.
pub trait CredentialLookup: Send + Sync {
    fn lookup(&self, headers: &HeaderMap) -> Option<Credential>;
}

/// Reads the credential from a named cookie.
#[derive(Clone, Debug)]
pub struct CookieCredentialLookup {
    cookie_name: String,
}

impl CookieCredentialLookup {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self { cookie_name: cookie_name.into() }
    }
}

impl CredentialLookup for CookieCredentialLookup {
    fn lookup(&self, headers: &HeaderMap) -> Option<Credential> {
        let jar = CookieJar::from_headers(headers);
        jar.get(&self.cookie_name)
            .map(Cookie::value)
            .and_then(Credential::new)
    }
}
