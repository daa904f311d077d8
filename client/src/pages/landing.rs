//! Entry page at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` is not classified by the server guard, so this page routes the user
//! itself from the session flag. The redirect is a full page load, so the
//! guard checks the cookie at the destination and corrects a stale flag.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::auth::{install_entry_redirect, page_load_navigate};

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    install_entry_redirect(session, page_load_navigate);

    view! { <div class="landing-page"></div> }
}
