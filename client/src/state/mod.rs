//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `clients`, `profile`, etc.) so
//! individual pages can depend on small focused models.

pub mod auth;
pub mod clients;
pub mod fetch;
pub mod profile;
pub mod ui;
