//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so the directory base URL
//! is baked in at compile time (`KYC_DIRECTORY_URL`). The config is provided
//! as Leptos context by `App` and read by pages that talk to the directory.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::fetch::RetryPolicy;

pub const DEFAULT_DIRECTORY_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory API base URL without a trailing slash.
    pub directory_url: String,
    /// Rows per page on the client list.
    pub page_size: u32,
    /// Retry budget for directory reads.
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        Self::with_directory_url(option_env!("KYC_DIRECTORY_URL"))
    }

    fn with_directory_url(url: Option<&str>) -> Self {
        let directory_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_DIRECTORY_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { directory_url, ..Self::default() }
    }
}
