//! Authenticated landing route at `/dashboard` and its sub-pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entered by full page load, so the server guard has already redirected
//! anonymous requests. The page never writes the session flag; it only
//! leaves for the login surface when the flag drops while mounted.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::auth::{install_signout_redirect, page_load_navigate};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    install_signout_redirect(session, page_load_navigate);

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
        </div>
    }
}
