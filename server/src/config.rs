//! Server configuration from environment variables.
//!
//! | variable              | default       | meaning                                   |
//! |-----------------------|---------------|-------------------------------------------|
//! | `PORT`                | `3000`        | listen port                               |
//! | `SESSION_COOKIE_NAME` | `accessToken` | cookie carrying the session credential    |
//! | `GUARD_BYPASS_PATHS`  | (none)        | extra comma-separated bypass patterns     |
//!
//! Bypass entries ending in `*` are segment-aware prefixes; others match
//! exactly. The built-in bypass list always applies.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::routes::{DASHBOARD_ROOT, LOGIN_PATH};

use crate::guard::GuardPolicy;
use crate::guard::path::{PathPattern, PathRules};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_COOKIE: &str = "accessToken";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid SESSION_COOKIE_NAME: {0:?}")]
    InvalidCookieName(String),
    #[error("invalid GUARD_BYPASS_PATHS entry: {0:?}")]
    InvalidBypassEntry(String),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub session_cookie: String,
    pub extra_bypass: Vec<PathPattern>,
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset and blank values use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let session_cookie = match get("SESSION_COOKIE_NAME") {
            Some(raw) if is_cookie_token(&raw) => raw,
            Some(raw) => return Err(ConfigError::InvalidCookieName(raw)),
            None => DEFAULT_SESSION_COOKIE.to_owned(),
        };

        let extra_bypass = match get("GUARD_BYPASS_PATHS") {
            Some(raw) => parse_bypass_list(&raw)?,
            None => Vec::new(),
        };

        Ok(Self { port, session_cookie, extra_bypass })
    }

    /// Guard policy with the fixed redirect targets and configured bypasses.
    pub fn guard_policy(&self) -> GuardPolicy {
        let rules = PathRules::new(DASHBOARD_ROOT, LOGIN_PATH).with_bypass(self.extra_bypass.iter().cloned());
        GuardPolicy::new(rules, LOGIN_PATH, DASHBOARD_ROOT)
    }
}

fn parse_bypass_list(raw: &str) -> Result<Vec<PathPattern>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| PathPattern::parse(entry).ok_or_else(|| ConfigError::InvalidBypassEntry(entry.to_owned())))
        .collect()
}

/// RFC 6265 cookie-name characters (an HTTP token).
fn is_cookie_token(name: &str) -> bool {
    name.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}
