//! Client state containers provided through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` by the app shell, so
//! their logic stays testable without a reactive runtime.

pub mod session;
