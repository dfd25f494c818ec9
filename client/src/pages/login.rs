//! Login page: directory lookup by email, then a password check.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend of our own. The typed email is searched in the user
//! directory, the exact (case-insensitive) match supplies the username, and
//! the directory's login endpoint confirms the password. On success the
//! session goes into context and the signed-in redirect sends the user to
//! their landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::{CredentialCheck, find_by_email, search_users, verify_credentials};
use crate::net::fetch::{FetchError, RequestSlot, RequestTicket, RetryPolicy};
use crate::net::types::DirectoryUser;
use crate::state::auth::{AuthState, SessionUser};
use crate::util::auth::install_signed_in_redirect;
use crate::util::validation::{FieldErrors, is_email, password_is_valid};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Incorrect email or password.")]
    InvalidCredentials,
    #[error("Login cancelled.")]
    Cancelled,
    #[error("Unable to log in, try again later.")]
    Unavailable(FetchError),
}

impl From<FetchError> for LoginError {
    fn from(err: FetchError) -> Self {
        if err.is_aborted() { Self::Cancelled } else { Self::Unavailable(err) }
    }
}

/// Field checks run before any network call.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_email(email.trim()) {
        errors.insert("email", INVALID_EMAIL);
    }
    if password.is_empty() {
        errors.insert("password", PASSWORD_REQUIRED);
    } else if !password_is_valid(password) {
        errors.insert("password", PASSWORD_TOO_SHORT);
    }
    errors
}

/// Pick the directory record for `email` out of the search results.
pub fn match_account<'a>(users: &'a [DirectoryUser], email: &str) -> Result<&'a DirectoryUser, LoginError> {
    find_by_email(users, email).ok_or(LoginError::InvalidCredentials)
}

/// Full login flow against the directory.
///
/// # Errors
///
/// [`LoginError::InvalidCredentials`] when no record matches or the password
/// is rejected; [`LoginError::Unavailable`] on transport failures.
pub async fn authenticate(
    base: &str,
    email: &str,
    password: &str,
    policy: RetryPolicy,
    ticket: &RequestTicket,
) -> Result<SessionUser, LoginError> {
    let email = email.trim();
    let users = search_users(base, email, policy, ticket).await?;
    let found = match_account(&users, email)?;
    let username = found.username.as_deref().unwrap_or(email);
    match verify_credentials(base, username, password).await? {
        CredentialCheck::Accepted => Ok(SessionUser::from_directory(found, email)),
        CredentialCheck::Rejected => Err(LoginError::InvalidCredentials),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let slot = StoredValue::new_local(RequestSlot::default());
    on_cleanup(move || slot.with_value(RequestSlot::cancel));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let found = validate_login(&email_value, &password_value);
        let valid = found.is_empty();
        errors.set(found);
        message.set(None);
        if !valid {
            return;
        }
        busy.set(true);
        let ticket = slot.with_value(RequestSlot::begin);
        let base = config.directory_url.clone();
        let policy = config.retry;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = authenticate(&base, &email_value, &password_value, policy, &ticket).await;
            if !ticket.is_current() {
                return;
            }
            busy.set(false);
            match outcome {
                // The signed-in redirect takes it from here.
                Ok(user) => auth.update(|a| a.login(user)),
                Err(err) => {
                    log::info!("login for {} failed: {err:?}", email_value.trim());
                    message.set(Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, base, policy);
        }
    };

    let field_error = move |key: &'static str| {
        move || errors.with(|e| e.get(key).copied()).map(|m| view! { <p class="form-error">{m}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img src="/logo.svg" alt="Simple KYC" class="auth-card__logo" />
                <h1>"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="email">"Your email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="name@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {field_error("email")}
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {field_error("password")}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="auth-message auth-message--error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footnote">
                    "Don't have an account yet? "
                    <a href="/auth/sign-up">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
