//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control for `/dashboard`
//! and `/auth/login` happens in the server route guard before these render.

pub mod dashboard;
pub mod landing;
pub mod login;
