//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every page; `App` owns the session
//! store for the lifetime of the client and hands it to pages via context.
//! Every page load reconciles the store against `/api/session`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::state::session::SessionStore;
use crate::util::auth::install_session_reconcile;

/// Full HTML document rendered by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::restore());
    provide_context(session);
    install_session_reconcile(session);

    view! {
        <Title text="Rental Admin"/>
        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/dashboard/*rest") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
