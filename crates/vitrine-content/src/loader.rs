//! Content document loading.
//!
//! One fresh retrieval per call, in the spirit of the
//! [Fetch Standard](https://fetch.spec.whatwg.org/): no caching, no retry.
//! Retry policy, if any, belongs to a higher-level collaborator; the page
//! itself keeps whatever document it already holds when a load fails.

use thiserror::Error;
use vitrine_common::net::{self, NetError};
use vitrine_common::url::join_path;

use crate::model::ContentDocument;

/// Path of the content document below the site's base URL.
pub const CONTENT_DOCUMENT_PATH: &str = "projects.json";

/// Failure of a single load attempt.
///
/// Neither kind is fatal to the page: the caller's policy is to keep the
/// previously held document (possibly empty) in place rather than crash
/// the view.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Network or transport failure fetching the document.
    #[error("failed to fetch content document: {0}")]
    Fetch(#[from] NetError),
    /// The response body does not conform to the content document shape.
    #[error("malformed content document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches and parses the content document for one site.
///
/// The base URL is explicit constructor state, never ambient global
/// configuration. The empty string selects the same-origin deployment
/// mode, where the endpoint is the rooted path `/projects.json`.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    base_url: String,
}

impl ContentLoader {
    /// Create a loader for the given site base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured site base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full content endpoint URL, joined with a single `/`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        join_path(&self.base_url, CONTENT_DOCUMENT_PATH)
    }

    /// Perform one fresh retrieval and parse of the content document.
    ///
    /// Has no side effects beyond the network call; the caller is
    /// responsible for storing the result.
    ///
    /// # Errors
    ///
    /// [`ContentError::Fetch`] on transport failure,
    /// [`ContentError::Malformed`] when the body does not parse.
    pub fn load(&self) -> Result<ContentDocument, ContentError> {
        let body = net::fetch_text(&self.endpoint())?;
        Ok(ContentDocument::from_json(&body)?)
    }
}
