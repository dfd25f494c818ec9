//! Sign-up page.
//!
//! The directory has no registration endpoint, so a valid form only pauses
//! briefly and hands over to `/login`.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::validation::{FieldErrors, is_email, password_is_valid};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const TERMS_REQUIRED: &str = "You must accept the Terms and Conditions.";

#[cfg(feature = "hydrate")]
const SUBMIT_DELAY_MS: u32 = 600;

pub fn validate_sign_up(email: &str, password: &str, confirm: &str, accepted_terms: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_email(email.trim()) {
        errors.insert("email", INVALID_EMAIL);
    }
    if !password_is_valid(password) {
        errors.insert("password", PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        errors.insert("confirm", PASSWORD_MISMATCH);
    }
    if !accepted_terms {
        errors.insert("terms", TERMS_REQUIRED);
    }
    errors
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let found = validate_sign_up(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            terms.get_untracked(),
        );
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                busy.set(false);
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    let field_error = move |key: &'static str| {
        move || errors.with(|e| e.get(key).copied()).map(|m| view! { <p class="form-error">{m}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img src="/logo.svg" alt="Simple KYC" class="auth-card__logo" />
                <h1>"Create an account"</h1>
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
                    <label class="auth-form__label" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        class="auth-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    {field_error("confirm")}
                    <label class="auth-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        " I accept the "
                        <a href="#">"Terms and Conditions"</a>
                    </label>
                    {field_error("terms")}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account…" } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footnote">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
