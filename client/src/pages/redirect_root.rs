//! `/`: send the visitor wherever their session says they belong.

#[cfg(test)]
#[path = "redirect_root_test.rs"]
mod redirect_root_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Target for `/` once the stored session is known.
pub fn root_target(state: &AuthState) -> Option<String> {
    if state.loading {
        return None;
    }
    Some(state.user.as_ref().map_or_else(|| "/login".to_owned(), |u| u.landing_path()))
}

#[component]
pub fn RedirectRoot() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(path) = root_target(&auth.get()) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <div class="pages-loading">"Loading..."</div> }
}
