//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. The session is a plain record
//! derived from a directory lookup; there is no token and no server session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::DirectoryUser;

/// Client-side permission tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    /// Compliance officer; may browse every client.
    Officer,
}

impl Role {
    /// Directory `admin`/`moderator` map to officers, everything else to users.
    pub fn from_directory_role(role: Option<&str>) -> Self {
        match role.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("admin" | "moderator") => Self::Officer,
            _ => Self::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Officer => "officer",
        }
    }
}

/// The signed-in user as persisted in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SessionUser {
    /// Build a session from the directory record matched for `typed_email`.
    pub fn from_directory(found: &DirectoryUser, typed_email: &str) -> Self {
        let typed_email = typed_email.trim();
        let name = found
            .full_name()
            .or_else(|| found.username.clone().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| typed_email.to_owned());
        let email = found
            .email
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| typed_email.to_owned());
        Self {
            id: found.id.to_string(),
            name,
            email,
            role: Some(Role::from_directory_role(found.role.as_deref())),
        }
    }

    pub fn is_officer(&self) -> bool {
        self.role == Some(Role::Officer)
    }

    /// Route a signed-in user lands on.
    pub fn landing_path(&self) -> String {
        if self.is_officer() {
            "/pages/clients".to_owned()
        } else {
            profile_path(&self.id)
        }
    }
}

/// Personal-information route for a directory id.
pub fn profile_path(id: &str) -> String {
    format!("/pages/user/{id}/pi")
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays true until the browser has read the stored session, so
/// guards never redirect during server render or hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the current session; at most one user is held at a time.
    pub fn login(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
