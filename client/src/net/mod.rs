//! Networking modules for the public user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` owns retry and cancellation, `api` builds directory requests on
//! top of it, and `types` defines the directory wire schema.

pub mod api;
pub mod fetch;
pub mod types;
