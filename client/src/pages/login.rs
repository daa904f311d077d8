//! Login surface at `/auth/login`.
//!
//! The credential form is served by the backend login flow; on success that
//! flow sets the session cookie and calls `SessionStore::mark_authenticated`.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Rental Admin"</h1>
                <p class="login-card__subtitle">"Masuk untuk melanjutkan"</p>
            </div>
        </div>
    }
}
