#![forbid(unsafe_code)]

//! HTTP accessors for the Hinga backend API.
//!
//! One client, one read path: fetch the crop listing and hand the decoded
//! body back untouched. The payload shape is owned by the backend, so this
//! crate treats it as opaque JSON rather than mirroring a struct that would
//! drift.
//!
//! # How it fits in the system
//! Screens construct an [`ApiClient`] once and call [`ApiClient::list_crops`]
//! per page load. Failures (network, non-2xx status, decode) surface as
//! [`ApiError`] without translation or retry; callers own the recovery
//! policy.

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Blocking client for the Hinga backend.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the backend at `base_url`.
    ///
    /// No timeout is configured: the calling flow blocks until the backend
    /// responds or the transport fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().build()?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the crop listing.
    ///
    /// Single GET to the crops collection endpoint; non-success statuses
    /// become errors and the JSON body is returned verbatim. No retry, no
    /// caching, no partial results.
    pub fn list_crops(&self) -> Result<Value> {
        let endpoint = format!("{}/crops", self.base_url);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("api_request", method = "GET", endpoint = %endpoint)
            .entered();

        let body = self
            .http
            .get(&endpoint)
            .send()?
            .error_for_status()?
            .json::<Value>()?;

        Ok(body)
    }
}
