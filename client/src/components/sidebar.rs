//! Side navigation for protected routes.
//!
//! Officers get the client list; every signed-in user gets their own profile.
//! On narrow screens the sidebar is a drawer driven by `UiState`.

use leptos::prelude::*;

use crate::state::auth::{AuthState, profile_path};
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_officer = move || auth.get().user.is_some_and(|u| u.is_officer());
    let own_profile = move || {
        auth.get()
            .user
            .map(|u| profile_path(&u.id))
            .unwrap_or_else(|| "/login".to_owned())
    };
    let close = move |_| ui.update(UiState::close_sidebar);

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <nav class="sidebar__nav">
                <Show when=is_officer>
                    <a href="/pages/clients" class="sidebar__link" on:click=close>
                        "Clients"
                    </a>
                </Show>
                <a href=own_profile class="sidebar__link" on:click=close>
                    "My profile"
                </a>
            </nav>
        </aside>
        <Show when=move || ui.get().sidebar_open>
            <div class="sidebar__backdrop" on:click=close></div>
        </Show>
    }
}
