//! Directory API helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `FetchError::Unavailable`
//! since the directory is only queried from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so lookup failures
//! degrade to inline form messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::fetch::{FetchError, RequestTicket, RetryPolicy, get_json};
use super::types::{DirectoryUser, UserPage};

/// Outcome of a credential check against the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialCheck {
    Accepted,
    Rejected,
}

pub(crate) fn search_endpoint(base: &str, query: &str) -> String {
    format!("{base}/users/search?q={}", urlencoding::encode(query))
}

pub(crate) fn user_endpoint(base: &str, id: &str) -> String {
    format!("{base}/users/{}", urlencoding::encode(id))
}

/// Paged listing URL; consumed by the client list through `use_fetch`.
pub fn users_page_endpoint(base: &str, limit: u32, skip: u32) -> String {
    format!("{base}/users?limit={limit}&skip={skip}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

/// Map the login endpoint status to a credential verdict.
///
/// Client errors mean the directory rejected the pair; anything else
/// non-2xx is a transport problem the caller should surface as such.
#[cfg(any(test, feature = "hydrate"))]
fn classify_login_status(status: u16, status_text: &str) -> Result<CredentialCheck, FetchError> {
    match status {
        200..=299 => Ok(CredentialCheck::Accepted),
        400..=499 => Ok(CredentialCheck::Rejected),
        _ => Err(FetchError::Status { status, status_text: status_text.to_owned() }),
    }
}

/// Search the directory with free text; `GET /users/search?q=`.
///
/// # Errors
///
/// Returns the underlying [`FetchError`] when the lookup fails.
pub async fn search_users(
    base: &str,
    query: &str,
    policy: RetryPolicy,
    ticket: &RequestTicket,
) -> Result<Vec<DirectoryUser>, FetchError> {
    let page: UserPage = get_json(&search_endpoint(base, query), policy, ticket).await?;
    Ok(page.users)
}

/// Fetch one directory record; `GET /users/{id}`.
///
/// # Errors
///
/// Returns the underlying [`FetchError`] when the lookup fails.
pub async fn fetch_user(
    base: &str,
    id: &str,
    policy: RetryPolicy,
    ticket: &RequestTicket,
) -> Result<DirectoryUser, FetchError> {
    get_json(&user_endpoint(base, id), policy, ticket).await
}

/// Check a username/password pair with `POST /auth/login`.
///
/// # Errors
///
/// Returns [`FetchError`] on network failure or a non-4xx error status.
pub async fn verify_credentials(base: &str, username: &str, password: &str) -> Result<CredentialCheck, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CredentialsRequest { username, password };
        let resp = gloo_net::http::Request::post(&login_endpoint(base))
            .json(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        classify_login_status(resp.status(), &resp.status_text())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, username, password);
        Err(FetchError::Unavailable)
    }
}

/// Pick the record whose email matches `email` case-insensitively.
pub fn find_by_email<'a>(users: &'a [DirectoryUser], email: &str) -> Option<&'a DirectoryUser> {
    let wanted = email.trim().to_lowercase();
    users
        .iter()
        .find(|u| u.email.as_deref().is_some_and(|e| e.to_lowercase() == wanted))
}
