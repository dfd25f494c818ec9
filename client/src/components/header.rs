//! Top bar with product name, signed-in identity, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `PagesLayout` above every protected route. Logging out clears
//! the session in context; the session mirror removes the stored copy.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::string::to_title_case;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let identity = move || {
        auth.get()
            .user
            .map(|user| {
                let role = to_title_case(user.role.unwrap_or_default().as_str());
                (user.name, role)
            })
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        ui.update(UiState::close_sidebar);
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    view! {
        <header class="header">
            <button
                class="btn header__menu"
                title="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <a href="/" class="header__brand">
                <img src="/logo.svg" alt="" class="header__logo" />
                <span>"Simple KYC"</span>
            </a>

            <span class="header__spacer"></span>

            <button
                class="btn header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="header__self">
                {move || identity().0}
                <span class="header__role">{move || identity().1}</span>
            </span>

            <button class="btn header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
