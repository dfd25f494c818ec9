//! Shell for every route under `/pages`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards the nested routes: while the stored session is still being read a
//! loading placeholder renders, and once it is known to be absent the guard
//! redirects to `/login`. Child routes render through the `Outlet`.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn PagesLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="pages-loading">"Loading..."</div> }
        >
            <div class="pages-layout">
                <Header />
                <div class="pages-layout__body">
                    <Sidebar />
                    <main class="pages-layout__main">
                        <Outlet />
                        <Footer />
                    </main>
                </div>
            </div>
        </Show>
    }
}
