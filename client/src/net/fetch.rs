//! Bounded-retry JSON fetch with per-consumer cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every directory read goes through `get_json`. A consumer (page, form)
//! owns one `RequestSlot`; calling `begin` on it supersedes whatever request
//! the slot issued before, so at most one request per consumer can still
//! write state.
//!
//! Retry budget is `retries + 1` attempts with linear backoff
//! (`retry_delay * attempt`). Cancelled requests are never retried and
//! never reported as failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;

pub const DEFAULT_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Failure modes of a directory request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A newer request or an unmount superseded this one.
    #[error("request cancelled")]
    Aborted,

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl FetchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Attempt budget and backoff for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub retries: u32,
    /// Base delay; the wait after attempt `n` is `retry_delay * n`.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { retries: DEFAULT_RETRIES, retry_delay: DEFAULT_RETRY_DELAY }
    }
}

impl RetryPolicy {
    /// Single attempt, no backoff.
    pub const fn none() -> Self {
        Self { retries: 0, retry_delay: Duration::ZERO }
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Delay before the attempt following failed attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay.saturating_mul(attempt)
    }
}

/// Per-consumer request slot. Cloning shares the slot.
#[derive(Clone, Debug, Default)]
pub struct RequestSlot {
    generation: Arc<AtomicU64>,
    #[cfg(feature = "hydrate")]
    controller: std::rc::Rc<std::cell::RefCell<Option<web_sys::AbortController>>>,
}

impl RequestSlot {
    /// Start a new request, superseding the previous one.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation_ref: Arc::clone(&self.generation),
            generation,
            #[cfg(feature = "hydrate")]
            signal: self.replace_controller(),
        }
    }

    /// Cancel the outstanding request, if any.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller.borrow_mut().take() {
                controller.abort();
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn replace_controller(&self) -> Option<web_sys::AbortSignal> {
        let mut slot = self.controller.borrow_mut();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let controller = web_sys::AbortController::new().ok()?;
        let signal = controller.signal();
        *slot = Some(controller);
        Some(signal)
    }
}

/// Handle for one request issued from a `RequestSlot`.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    generation_ref: Arc<AtomicU64>,
    generation: u64,
    #[cfg(feature = "hydrate")]
    signal: Option<web_sys::AbortSignal>,
}

impl RequestTicket {
    /// A ticket not tied to any consumer; never superseded.
    pub fn detached() -> Self {
        RequestSlot::default().begin()
    }

    /// False once the owning slot has begun another request or cancelled.
    pub fn is_current(&self) -> bool {
        self.generation_ref.load(Ordering::SeqCst) == self.generation
    }

    #[cfg(feature = "hydrate")]
    fn signal(&self) -> Option<&web_sys::AbortSignal> {
        self.signal.as_ref()
    }
}

/// Drive `attempt` under `policy`, sleeping with `sleep` between failures.
///
/// Returns `FetchError::Aborted` as soon as `ticket` stops being current,
/// including when a late success arrives for a superseded request.
///
/// # Errors
///
/// Returns the last attempt's error once the budget is spent.
pub async fn run_with_retry<T, A, AFut, S, SFut>(
    policy: RetryPolicy,
    ticket: &RequestTicket,
    mut attempt: A,
    mut sleep: S,
) -> Result<T, FetchError>
where
    A: FnMut(u32) -> AFut,
    AFut: Future<Output = Result<T, FetchError>>,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempts = 0_u32;
    loop {
        attempts += 1;
        let outcome = attempt(attempts).await;
        if !ticket.is_current() {
            return Err(FetchError::Aborted);
        }
        match outcome {
            Ok(value) => return Ok(value),
            Err(err) if err.is_aborted() => return Err(err),
            Err(err) if attempts >= policy.max_attempts() => return Err(err),
            Err(err) => {
                log::debug!("fetch attempt {attempts} failed: {err}; retrying");
                sleep(policy.backoff(attempts)).await;
                if !ticket.is_current() {
                    return Err(FetchError::Aborted);
                }
            }
        }
    }
}

/// `GET` `url` and decode JSON, retrying per `policy`.
///
/// # Errors
///
/// See [`FetchError`]; on the server build this is always `Unavailable`.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    policy: RetryPolicy,
    ticket: &RequestTicket,
) -> Result<T, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let signal = ticket.signal();
        run_with_retry(policy, ticket, move |_| send_get::<T>(url, signal), gloo_timers::future::sleep).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, policy, ticket);
        Err(FetchError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_get<T: DeserializeOwned>(url: &str, signal: Option<&web_sys::AbortSignal>) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status { status: resp.status(), status_text: resp.status_text() });
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
