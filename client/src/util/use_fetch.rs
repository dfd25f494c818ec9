//! Reactive JSON fetch bound to a URL signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand in a URL signal and read a `FetchState` signal back. Each hook
//! instance owns one `RequestSlot`: a URL change or `refetch` supersedes the
//! in-flight request, and unmounting cancels it.

#[cfg(test)]
#[path = "use_fetch_test.rs"]
mod use_fetch_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::fetch::{RequestSlot, RetryPolicy};
use crate::state::fetch::FetchState;

/// Handle returned by [`use_fetch`].
pub struct FetchHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<FetchState<T>>,
    url: RwSignal<Option<String>>,
    slot: StoredValue<RequestSlot, LocalStorage>,
    policy: RetryPolicy,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Re-run the request, optionally against a new URL.
    pub fn refetch(&self, url: Option<String>) {
        let target = request_target(self.url.get_untracked(), url);
        self.url.set(target);
        issue(self.state, self.url, self.slot, self.policy);
    }
}

/// URL the next request goes to: a replacement wins over the current one.
/// `None` means there is nothing to fetch and the request is skipped.
fn request_target(current: Option<String>, replacement: Option<String>) -> Option<String> {
    replacement.or(current)
}

/// Fetch `url` whenever it changes; `None` leaves the state idle.
pub fn use_fetch<T>(url: Signal<Option<String>>, policy: RetryPolicy) -> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let state = RwSignal::new(FetchState::pending(url.get_untracked().is_some()));
    let current_url = RwSignal::new(None::<String>);
    let slot = StoredValue::new_local(RequestSlot::default());

    Effect::new(move || {
        let Some(next) = url.get() else {
            return;
        };
        current_url.set(Some(next));
        issue(state, current_url, slot, policy);
    });

    on_cleanup(move || {
        slot.with_value(RequestSlot::cancel);
    });

    FetchHandle { state, url: current_url, slot, policy }
}

fn issue<T>(
    state: RwSignal<FetchState<T>>,
    url: RwSignal<Option<String>>,
    slot: StoredValue<RequestSlot, LocalStorage>,
    policy: RetryPolicy,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let Some(target) = url.get_untracked() else {
        return;
    };
    let ticket = slot.with_value(RequestSlot::begin);
    state.update(FetchState::start);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::fetch::get_json::<T>(&target, policy, &ticket).await;
        if let Err(err) = &outcome {
            if !err.is_aborted() {
                log::warn!("fetch {target} failed: {err}");
            }
        }
        if ticket.is_current() {
            state.update(|s| s.settle(outcome));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, ticket, policy);
    }
}
