//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"© Simple KYC"</span>
            <span class="footer__spacer"></span>
            <a href="https://dummyjson.com/docs/users" class="footer__link" target="_blank" rel="noreferrer">
                "Directory API"
            </a>
        </footer>
    }
}
