//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entry page has no server-side request to inspect before it renders, so
//! it routes from the session flag instead. Authenticated users go to the
//! dashboard, everyone else to the login surface.
//!
//! Redirects into guarded routes use `page_load_navigate`, a full page load,
//! so the server route guard re-checks the session cookie. A stale flag can
//! pick the wrong destination, but the guard corrects it on arrival.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{DASHBOARD_ROOT, LOGIN_PATH};
use crate::state::session::SessionStore;

/// Where the entry page sends the user for the current flag.
pub fn entry_redirect_target(session: &SessionStore) -> &'static str {
    if session.is_authenticated() { DASHBOARD_ROOT } else { LOGIN_PATH }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// One pass of the entry redirect. Reads `session` tracked.
pub fn redirect_entry<F>(session: RwSignal<SessionStore>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    let target = entry_redirect_target(&session.get());
    navigate(target, replace_options());
}

/// Navigate away from the entry page according to the session flag.
///
/// Re-runs when the flag changes, so a reconcile that flips a stale flag
/// corrects the destination.
pub fn install_entry_redirect<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || redirect_entry(session, &navigate));
}

/// One pass of the sign-out redirect. Returns the flag for the next pass.
///
/// Navigates to the login surface only when the flag goes from `true` to
/// `false` while the page is mounted. The first pass never navigates: the
/// page was reached through the server guard, which already checked the
/// cookie.
pub fn redirect_on_signout<F>(session: RwSignal<SessionStore>, previous: Option<bool>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let authenticated = session.get().is_authenticated();
    if previous == Some(true) && !authenticated {
        navigate(LOGIN_PATH, replace_options());
    }
    authenticated
}

/// Leave an authenticated page once the session flag drops.
pub fn install_signout_redirect<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<bool>| redirect_on_signout(session, previous, &navigate));
}

/// Navigate with a full page load so the request passes the route guard.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn page_load_navigate(target: &str, options: NavigateOptions) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let result = if options.replace { location.replace(target) } else { location.set_href(target) };
        if result.is_err() {
            log::warn!("navigation to {target} failed");
        }
    }
}

/// Ask the server for the credential state and align the flag with it.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn install_session_reconcile(session: RwSignal<SessionStore>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(status) = crate::net::api::fetch_session_status().await else {
            return;
        };
        let current = session.get_untracked();
        if current.is_authenticated() != status.authenticated {
            log::debug!("session flag reconciled to {}", status.authenticated);
            session.update(|s| {
                s.reconcile(status.authenticated);
            });
        }
    });
}
