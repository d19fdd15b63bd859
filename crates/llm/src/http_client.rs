//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients used by
//! provider implementations.

use std::time::Duration;

/// Default connect timeout for provider clients.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build a `reqwest::Client` for provider use.
///
/// Per-request deadlines are set by callers via `RequestBuilder::timeout`;
/// the client itself only bounds connection establishment.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}
