use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type Calls = Rc<RefCell<Vec<(String, bool)>>>;

/// Navigate stand-in recording `(target, replace)` per call.
fn recording_navigate() -> (Calls, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls: Calls = Rc::default();
    let sink = calls.clone();
    let navigate = move |target: &str, options: NavigateOptions| {
        sink.borrow_mut().push((target.to_owned(), options.replace));
    };
    (calls, navigate)
}

fn recorded(calls: &Calls) -> Vec<(String, bool)> {
    calls.borrow().clone()
}

// =============================================================
// entry_redirect_target
// =============================================================

#[test]
fn entry_redirect_goes_to_dashboard_when_authenticated() {
    let session = SessionStore::new(true);
    assert_eq!(entry_redirect_target(&session), "/dashboard");
}

#[test]
fn entry_redirect_goes_to_login_when_unauthenticated() {
    let session = SessionStore::new(false);
    assert_eq!(entry_redirect_target(&session), "/auth/login");
}

#[test]
fn entry_redirect_follows_mark_actions() {
    let mut session = SessionStore::default();
    session.mark_authenticated();
    assert_eq!(entry_redirect_target(&session), DASHBOARD_ROOT);
    session.mark_unauthenticated();
    assert_eq!(entry_redirect_target(&session), LOGIN_PATH);
}

// =============================================================
// redirect_entry
// =============================================================

#[test]
fn redirect_entry_navigates_to_dashboard_with_replace() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(true));
        let (calls, navigate) = recording_navigate();

        redirect_entry(session, &navigate);

        assert_eq!(recorded(&calls), vec![("/dashboard".to_owned(), true)]);
    });
}

#[test]
fn redirect_entry_navigates_to_login_with_replace() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(false));
        let (calls, navigate) = recording_navigate();

        redirect_entry(session, &navigate);

        assert_eq!(recorded(&calls), vec![("/auth/login".to_owned(), true)]);
    });
}

#[test]
fn redirect_entry_renavigates_after_reconcile_flips_flag() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(true));
        let (calls, navigate) = recording_navigate();

        redirect_entry(session, &navigate);
        session.update(|s| {
            s.reconcile(false);
        });
        redirect_entry(session, &navigate);

        assert_eq!(
            recorded(&calls),
            vec![("/dashboard".to_owned(), true), ("/auth/login".to_owned(), true)]
        );
    });
}

// =============================================================
// redirect_on_signout
// =============================================================

#[test]
fn signout_redirect_first_pass_never_navigates() {
    Owner::new().with(|| {
        let (calls, navigate) = recording_navigate();
        for flag in [true, false] {
            let session = RwSignal::new(SessionStore::new(flag));
            assert_eq!(redirect_on_signout(session, None, &navigate), flag);
        }
        assert!(recorded(&calls).is_empty());
    });
}

#[test]
fn signout_redirect_leaves_when_flag_drops() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(true));
        let (calls, navigate) = recording_navigate();

        let previous = redirect_on_signout(session, None, &navigate);
        session.update(|s| {
            s.reconcile(false);
        });
        let previous = redirect_on_signout(session, Some(previous), &navigate);

        assert!(!previous);
        assert_eq!(recorded(&calls), vec![("/auth/login".to_owned(), true)]);
    });
}

#[test]
fn signout_redirect_ignores_stale_false_turning_true() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(false));
        let (calls, navigate) = recording_navigate();

        let previous = redirect_on_signout(session, None, &navigate);
        session.update(|s| {
            s.reconcile(true);
        });
        let previous = redirect_on_signout(session, Some(previous), &navigate);

        assert!(previous);
        assert!(recorded(&calls).is_empty());
    });
}

#[test]
fn signout_redirect_does_not_mark_authenticated() {
    Owner::new().with(|| {
        let session = RwSignal::new(SessionStore::new(false));
        let (_calls, navigate) = recording_navigate();

        redirect_on_signout(session, None, &navigate);

        assert!(!session.get_untracked().is_authenticated());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_load_navigate_is_noop_off_browser() {
    page_load_navigate("/dashboard", replace_options());
}
