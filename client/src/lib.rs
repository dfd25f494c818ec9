//! # kyc-client
//!
//! Leptos + WASM frontend for the Simple KYC demo: login and sign-up screens,
//! a paged client list, and a personal-information editor backed by a public
//! user-directory API.
//!
//! This crate contains pages, components, application state, the directory
//! API wrapper and the retrying fetch hook. The `ssr` feature renders the
//! HTML shell on the host; the `hydrate` feature runs the app in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
