//! HTTP fetch utilities for the content loader.
//!
//! Provides a simple blocking GET wrapper. Each call builds a fresh
//! request: the loader's contract is one best-effort retrieval per
//! invocation, with no caching and no retry.

use std::time::Duration;
use thiserror::Error;

/// User-Agent header sent with all requests.
const USER_AGENT: &str = "vitrine/0.1";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Transport-level failure from a fetch.
#[derive(Debug, Error)]
pub enum NetError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(reqwest::Error),
    /// The request itself failed (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    /// The response body could not be read or decoded as text.
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`NetError`] if the HTTP client cannot be created, the
/// request fails, the response has a non-success status, or the body
/// cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, NetError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(NetError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(NetError::Transport)?;

    if !response.status().is_success() {
        return Err(NetError::Status(response.status()));
    }

    response.text().map_err(NetError::Body)
}
