//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::pages_layout::PagesLayout;
use crate::config::ClientConfig;
use crate::pages::{
    clients::ClientsPage, login::LoginPage, personal_information::PersonalInformationPage,
    redirect_root::RedirectRoot, sign_up::SignUpPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::install_session_sync;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/logo.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI chrome and directory config contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(ClientConfig::from_build_env());

    install_session_sync(auth);

    // Theme is browser-only state; pick it up once hydrated.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/simple-kyc.css"/>
        <Title text="Simple KYC"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RedirectRoot/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("sign-up")) view=SignUpPage/>
                <ParentRoute path=StaticSegment("pages") view=PagesLayout>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route
                        path=(StaticSegment("user"), ParamSegment("id"), StaticSegment("pi"))
                        view=PersonalInformationPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
