//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and the session held
//! in context is kept in step with local storage from one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once the stored session has been read and none was found.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a signed-in user should be sent from the login screen, if anywhere.
pub fn signed_in_redirect(state: &AuthState) -> Option<String> {
    if state.loading {
        return None;
    }
    state.user.as_ref().map(crate::state::auth::SessionUser::landing_path)
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", replace());
        }
    });
}

/// Redirect a signed-in user to their landing route.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = signed_in_redirect(&auth.get()) {
            navigate(&path, replace());
        }
    });
}

/// Restore the stored session in the browser and mirror every later change.
///
/// Effects only run after hydration, so the server render always sees the
/// default loading state.
pub fn install_session_sync(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let stored = crate::util::session_store::load_session();
        auth.update(|a| {
            a.user = stored;
            a.loading = false;
        });
    });
    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            crate::util::session_store::persist_session(state.user.as_ref());
        }
    });
}
