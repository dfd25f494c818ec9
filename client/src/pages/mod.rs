//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod clients;
pub mod login;
pub mod personal_information;
pub mod redirect_root;
pub mod sign_up;
