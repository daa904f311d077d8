use super::*;

#[test]
fn default_store_is_unauthenticated() {
    assert!(!SessionStore::default().is_authenticated());
}

#[test]
fn restore_outside_browser_is_unauthenticated() {
    assert_eq!(SessionStore::restore(), SessionStore::new(false));
}

#[test]
fn mark_authenticated_then_read_is_true() {
    let mut store = SessionStore::default();
    store.mark_authenticated();
    assert!(store.is_authenticated());
}

#[test]
fn mark_unauthenticated_then_read_is_false() {
    let mut store = SessionStore::new(true);
    store.mark_unauthenticated();
    assert!(!store.is_authenticated());
}

#[test]
fn marks_are_idempotent() {
    let mut store = SessionStore::default();
    store.mark_authenticated();
    store.mark_authenticated();
    assert!(store.is_authenticated());
    store.mark_unauthenticated();
    store.mark_unauthenticated();
    assert!(!store.is_authenticated());
}

#[test]
fn reconcile_reports_change_when_flag_was_stale() {
    let mut store = SessionStore::new(true);
    assert!(store.reconcile(false));
    assert!(!store.is_authenticated());

    assert!(store.reconcile(true));
    assert!(store.is_authenticated());
}

#[test]
fn reconcile_is_noop_when_flag_already_matches() {
    let mut store = SessionStore::new(false);
    assert!(!store.reconcile(false));
    assert_eq!(store, SessionStore::new(false));
}
