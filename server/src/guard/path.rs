//! Path classification for the route guard.
//!
//! DESIGN
//! ======
//! Every request path maps to exactly one `PathClass`. The bypass list is
//! data, not branching: a `Vec<PathPattern>` checked before the protected and
//! login patterns. Bypass prefixes are segment-aware, so `/api` covers
//! `/api/health` but not `/apiary`. The protected root is a plain string
//! prefix: anything starting with `/dashboard` needs a session.
//!
//! Matching runs on the raw request path, the same bytes Axum routes on.
//! Percent-escapes are never decoded here.
//!
//! ERROR HANDLING
//! ==============
//! Only paths that are not usable as a request path at all (empty, or not
//! starting with `/`) yield `ClassifyError`. The guard never denies on these:
//! `classify_or_unclassified` logs and treats them as `Unclassified`, which
//! always allows the request through.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use client::routes::{DASHBOARD_ROOT, LOGIN_PATH};

// =============================================================================
// PATTERNS
// =============================================================================

/// Declarative path matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches one path exactly.
    Exact(String),
    /// Matches a path and everything below it, on segment boundaries.
    Prefix(String),
    /// Matches any path starting with the string, segment boundary or not.
    StartsWith(String),
}

impl PathPattern {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    /// Trailing slashes are dropped so `/api/` and `/api` behave the same.
    pub fn prefix(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::Prefix(path.trim_end_matches('/').to_owned())
    }

    pub fn starts_with(path: impl Into<String>) -> Self {
        Self::StartsWith(path.into())
    }

    /// Parse a configured entry: `/assets*` is a prefix, `/robots.txt` exact.
    /// Entries that are not absolute paths are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return None;
        }
        match raw.strip_suffix('*') {
            Some(prefix) => Some(Self::prefix(prefix)),
            None => Some(Self::exact(raw)),
        }
    }

    /// Test a normalized path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            Self::StartsWith(start) => path.starts_with(start.as_str()),
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// The three path classes the guard distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathClass {
    /// Requires a session credential.
    Protected,
    /// The login surface; off-limits once authenticated.
    AuthEntry,
    /// Never intercepted.
    Unclassified,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("empty path")]
    Empty,
    #[error("path is not absolute: {0:?}")]
    NotAbsolute(String),
}

/// Validate `raw` and drop one trailing slash (except on `/`).
pub fn normalize(raw: &str) -> Result<&str, ClassifyError> {
    if raw.is_empty() {
        return Err(ClassifyError::Empty);
    }
    if !raw.starts_with('/') {
        return Err(ClassifyError::NotAbsolute(raw.to_owned()));
    }
    match raw.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Ok(raw),
    }
}

/// Bypass list plus the protected and login patterns.
#[derive(Clone, Debug)]
pub struct PathRules {
    bypass: Vec<PathPattern>,
    protected: PathPattern,
    auth_entry: PathPattern,
}

impl PathRules {
    /// Rules for a dashboard root and login path, with the default bypass list.
    pub fn new(dashboard_root: &str, login_path: &str) -> Self {
        Self {
            bypass: Self::default_bypass(),
            protected: PathPattern::starts_with(dashboard_root),
            auth_entry: PathPattern::exact(login_path),
        }
    }

    /// API namespace, internal and bundled assets, favicon.
    pub fn default_bypass() -> Vec<PathPattern> {
        vec![
            PathPattern::prefix("/api"),
            PathPattern::prefix("/_internal"),
            PathPattern::prefix("/pkg"),
            PathPattern::exact("/favicon.ico"),
        ]
    }

    #[must_use]
    pub fn with_bypass(mut self, extra: impl IntoIterator<Item = PathPattern>) -> Self {
        self.bypass.extend(extra);
        self
    }

    /// Classify a raw request path.
    ///
    /// The login pattern is checked before the protected one so a login path
    /// nested under the dashboard root cannot produce a redirect loop.
    pub fn classify(&self, raw: &str) -> Result<PathClass, ClassifyError> {
        let path = normalize(raw)?;
        if self.bypass.iter().any(|p| p.matches(path)) {
            return Ok(PathClass::Unclassified);
        }
        if self.auth_entry.matches(path) {
            return Ok(PathClass::AuthEntry);
        }
        if self.protected.matches(path) {
            return Ok(PathClass::Protected);
        }
        Ok(PathClass::Unclassified)
    }

    /// `classify`, failing open to `Unclassified` on error.
    pub fn classify_or_unclassified(&self, raw: &str) -> PathClass {
        match self.classify(raw) {
            Ok(class) => class,
            Err(e) => {
                tracing::warn!(path = %raw, error = %e, "path classification failed; allowing request");
                PathClass::Unclassified
            }
        }
    }
}

impl Default for PathRules {
    fn default() -> Self {
        Self::new(DASHBOARD_ROOT, LOGIN_PATH)
    }
}
