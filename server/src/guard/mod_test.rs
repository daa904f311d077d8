use axum::http::HeaderValue;
use axum::http::header::COOKIE;

use super::credential::CookieCredentialLookup;
use super::*;

/// Test double: reports a fixed credential regardless of headers.
struct StaticLookup(Option<&'static str>);

impl CredentialLookup for StaticLookup {
    fn lookup(&self, _headers: &HeaderMap) -> Option<Credential> {
        self.0.and_then(Credential::new)
    }
}

const PROTECTED: &[&str] = &[
    "/dashboard",
    "/dashboard/transaksi",
    "/dashboard/blog/3",
    "/dashboard/jenis-motor/",
    "/dashboard-old",
    "/dashboard/%FF",
    "/dashboard/%0A",
];
const UNCLASSIFIED: &[&str] = &["/api/health", "/_internal/asset.js", "/favicon.ico", "/api/anything", "/", "/about"];

fn redirect(target: &str) -> RoutingDecision {
    RoutingDecision::RedirectTo(target.to_owned())
}

// =============================================================================
// GuardPolicy::decide
// =============================================================================

#[test]
fn protected_without_credential_redirects_to_login() {
    let policy = GuardPolicy::default();
    for path in PROTECTED {
        assert_eq!(policy.decide(path, SessionState::Unauthenticated), redirect("/auth/login"), "{path}");
    }
}

#[test]
fn protected_with_credential_is_allowed() {
    let policy = GuardPolicy::default();
    for path in PROTECTED {
        assert_eq!(policy.decide(path, SessionState::Authenticated), RoutingDecision::Allow, "{path}");
    }
}

#[test]
fn login_with_credential_redirects_to_dashboard() {
    let policy = GuardPolicy::default();
    assert_eq!(policy.decide("/auth/login", SessionState::Authenticated), redirect("/dashboard"));
}

#[test]
fn login_without_credential_is_allowed() {
    let policy = GuardPolicy::default();
    assert_eq!(policy.decide("/auth/login", SessionState::Unauthenticated), RoutingDecision::Allow);
}

#[test]
fn unclassified_is_always_allowed() {
    let policy = GuardPolicy::default();
    for path in UNCLASSIFIED {
        for session in [SessionState::Unauthenticated, SessionState::Authenticated] {
            assert_eq!(policy.decide(path, session), RoutingDecision::Allow, "{path} {session:?}");
        }
    }
}

#[test]
fn invalid_escapes_under_dashboard_redirect_to_login() {
    let policy = GuardPolicy::default();
    for path in ["/dashboard/%FF", "/dashboard/%0A", "/dashboard/transaksi%FF"] {
        assert_eq!(policy.decide(path, SessionState::Unauthenticated), redirect("/auth/login"), "{path}");
    }
}

#[test]
fn unusable_paths_fail_open() {
    let policy = GuardPolicy::default();
    for path in ["", "dashboard", "*"] {
        assert_eq!(policy.decide(path, SessionState::Unauthenticated), RoutingDecision::Allow, "{path:?}");
    }
}

#[test]
fn decide_is_idempotent() {
    let policy = GuardPolicy::default();
    for path in PROTECTED.iter().chain(UNCLASSIFIED).chain(&["/auth/login"]) {
        for session in [SessionState::Unauthenticated, SessionState::Authenticated] {
            assert_eq!(policy.decide(path, session), policy.decide(path, session));
        }
    }
}

#[test]
fn custom_targets_are_used() {
    let policy = GuardPolicy::new(PathRules::new("/admin", "/masuk"), "/masuk", "/admin");
    assert_eq!(policy.decide("/admin/users", SessionState::Unauthenticated), redirect("/masuk"));
    assert_eq!(policy.decide("/masuk", SessionState::Authenticated), redirect("/admin"));
}

#[test]
fn decision_helpers() {
    assert!(RoutingDecision::Allow.is_allow());
    assert_eq!(RoutingDecision::Allow.target(), None);
    assert!(!redirect("/x").is_allow());
    assert_eq!(redirect("/x").target(), Some("/x"));
}

// =============================================================================
// RouteGuard
// =============================================================================

#[test]
fn session_state_follows_lookup() {
    let anon = RouteGuard::new(GuardPolicy::default(), StaticLookup(None));
    let authed = RouteGuard::new(GuardPolicy::default(), StaticLookup(Some("tok")));
    assert_eq!(anon.session_state(&HeaderMap::new()), SessionState::Unauthenticated);
    assert_eq!(authed.session_state(&HeaderMap::new()), SessionState::Authenticated);
    assert!(authed.session_state(&HeaderMap::new()).is_authenticated());
}

#[test]
fn empty_credential_from_lookup_is_unauthenticated() {
    let guard = RouteGuard::new(GuardPolicy::default(), StaticLookup(Some("")));
    assert_eq!(guard.session_state(&HeaderMap::new()), SessionState::Unauthenticated);
}

#[test]
fn end_to_end_scenarios_with_cookie_lookup() {
    let guard = RouteGuard::new(GuardPolicy::default(), CookieCredentialLookup::new("accessToken"));
    let mut with_cookie = HeaderMap::new();
    with_cookie.insert(COOKIE, HeaderValue::from_static("accessToken=abc"));
    let without_cookie = HeaderMap::new();

    assert_eq!(guard.evaluate("/dashboard/transaksi", &without_cookie), redirect("/auth/login"));
    assert_eq!(guard.evaluate("/auth/login", &with_cookie), redirect("/dashboard"));
    assert_eq!(guard.evaluate("/api/anything", &without_cookie), RoutingDecision::Allow);
}
