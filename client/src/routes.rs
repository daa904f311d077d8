//! Route literals shared by the server guard and client navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server route guard redirects to these paths and the client entry page
//! navigates to them. Keeping them in one place stops the two halves of the
//! session contract from drifting.

/// Login surface. Reachable only while unauthenticated.
pub const LOGIN_PATH: &str = "/auth/login";

/// Root of the authenticated area. Everything under it requires a session.
pub const DASHBOARD_ROOT: &str = "/dashboard";
