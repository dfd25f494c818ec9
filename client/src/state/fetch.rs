//! Request lifecycle state shared by data-driven views.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so pages and the `use_fetch` hook agree on
//! one rule set: a new attempt keeps stale data visible, a success replaces
//! it, a final failure clears it.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::fetch::FetchError;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// Initial state; loading when a request is about to be issued.
    pub fn pending(will_fetch: bool) -> Self {
        Self { loading: will_fetch, ..Self::default() }
    }

    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, error: FetchError) {
        self.data = None;
        self.loading = false;
        self.error = Some(error);
    }

    /// Apply a request outcome; cancelled requests leave the state untouched.
    pub fn settle(&mut self, outcome: Result<T, FetchError>) {
        match outcome {
            Ok(data) => self.succeed(data),
            Err(FetchError::Aborted) => {}
            Err(err) => self.fail(err),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
