//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and the client/profile cards while
//! reading shared state from Leptos context providers.

pub mod footer;
pub mod header;
pub mod pages_layout;
pub mod sidebar;
pub mod user_card;
pub mod user_detail;
