//! Rental admin dashboard client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos application rendered by the server (`ssr`) and hydrated in the
//! browser (`hydrate`). Owns the client-side session flag that mirrors the
//! server route guard's view of the session cookie.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
