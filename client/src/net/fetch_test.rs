use std::cell::RefCell;
use std::future::ready;

use futures::executor::block_on;

use super::*;

fn fast_policy(retries: u32) -> RetryPolicy {
    RetryPolicy { retries, retry_delay: Duration::from_millis(100) }
}

fn http_500() -> FetchError {
    FetchError::Status { status: 500, status_text: "Internal Server Error".to_owned() }
}

// =============================================================
// RetryPolicy
// =============================================================

#[test]
fn default_policy_is_two_retries_at_500ms() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.retries, 2);
    assert_eq!(policy.retry_delay, Duration::from_millis(500));
    assert_eq!(policy.max_attempts(), 3);
}

#[test]
fn backoff_is_linear_in_attempt_number() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.backoff(1), Duration::from_millis(500));
    assert_eq!(policy.backoff(2), Duration::from_millis(1000));
    assert_eq!(policy.backoff(3), Duration::from_millis(1500));
}

#[test]
fn none_policy_allows_one_attempt() {
    assert_eq!(RetryPolicy::none().max_attempts(), 1);
    assert_eq!(RetryPolicy::none().backoff(5), Duration::ZERO);
}

// =============================================================
// FetchError
// =============================================================

#[test]
fn status_error_reads_like_http_status_line() {
    assert_eq!(http_500().to_string(), "HTTP 500 Internal Server Error");
}

#[test]
fn only_aborted_reports_aborted() {
    assert!(FetchError::Aborted.is_aborted());
    assert!(!FetchError::Network("offline".to_owned()).is_aborted());
}

// =============================================================
// RequestSlot
// =============================================================

#[test]
fn begin_supersedes_previous_ticket() {
    let slot = RequestSlot::default();
    let first = slot.begin();
    assert!(first.is_current());
    let second = slot.begin();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let slot = RequestSlot::default();
    let ticket = slot.begin();
    slot.cancel();
    assert!(!ticket.is_current());
}

#[test]
fn cloned_slot_shares_generation() {
    let slot = RequestSlot::default();
    let ticket = slot.begin();
    slot.clone().begin();
    assert!(!ticket.is_current());
}

// =============================================================
// run_with_retry
// =============================================================

#[test]
fn success_on_first_attempt_does_not_sleep() {
    let sleeps = RefCell::new(Vec::new());
    let ticket = RequestTicket::detached();
    let result = block_on(run_with_retry(
        fast_policy(2),
        &ticket,
        |_| ready(Ok::<_, FetchError>(7)),
        |d| {
            sleeps.borrow_mut().push(d);
            ready(())
        },
    ));
    assert_eq!(result, Ok(7));
    assert!(sleeps.borrow().is_empty());
}

#[test]
fn retries_until_success_with_linear_backoff() {
    let sleeps = RefCell::new(Vec::new());
    let ticket = RequestTicket::detached();
    let result = block_on(run_with_retry(
        fast_policy(2),
        &ticket,
        |attempt| ready(if attempt < 3 { Err(http_500()) } else { Ok("done") }),
        |d| {
            sleeps.borrow_mut().push(d);
            ready(())
        },
    ));
    assert_eq!(result, Ok("done"));
    assert_eq!(*sleeps.borrow(), vec![Duration::from_millis(100), Duration::from_millis(200)]);
}

#[test]
fn exhausted_budget_returns_last_error() {
    let calls = RefCell::new(0_u32);
    let ticket = RequestTicket::detached();
    let result: Result<(), FetchError> = block_on(run_with_retry(
        fast_policy(2),
        &ticket,
        |attempt| {
            *calls.borrow_mut() += 1;
            ready(Err(FetchError::Network(format!("attempt {attempt}"))))
        },
        |_| ready(()),
    ));
    assert_eq!(result, Err(FetchError::Network("attempt 3".to_owned())));
    assert_eq!(*calls.borrow(), 3);
}

#[test]
fn superseded_request_reports_aborted_even_on_success() {
    let slot = RequestSlot::default();
    let ticket = slot.begin();
    let result = block_on(run_with_retry(
        fast_policy(2),
        &ticket,
        |_| {
            slot.begin();
            ready(Ok::<_, FetchError>(1))
        },
        |_| ready(()),
    ));
    assert_eq!(result, Err(FetchError::Aborted));
}

#[test]
fn cancel_during_backoff_stops_retrying() {
    let slot = RequestSlot::default();
    let ticket = slot.begin();
    let calls = RefCell::new(0_u32);
    let result: Result<(), FetchError> = block_on(run_with_retry(
        fast_policy(5),
        &ticket,
        |_| {
            *calls.borrow_mut() += 1;
            ready(Err(http_500()))
        },
        |_| {
            slot.cancel();
            ready(())
        },
    ));
    assert_eq!(result, Err(FetchError::Aborted));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn aborted_attempt_is_not_retried() {
    let calls = RefCell::new(0_u32);
    let ticket = RequestTicket::detached();
    let result: Result<(), FetchError> = block_on(run_with_retry(
        fast_policy(3),
        &ticket,
        |_| {
            *calls.borrow_mut() += 1;
            ready(Err(FetchError::Aborted))
        },
        |_| ready(()),
    ));
    assert_eq!(result, Err(FetchError::Aborted));
    assert_eq!(*calls.borrow(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn get_json_is_unavailable_off_browser() {
    let ticket = RequestTicket::detached();
    let result: Result<serde_json::Value, _> =
        block_on(get_json("https://example.test", RetryPolicy::default(), &ticket));
    assert_eq!(result, Err(FetchError::Unavailable));
}
