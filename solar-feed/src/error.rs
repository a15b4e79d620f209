//! Error types for the feed client
use std::time::Duration;
use thiserror::Error;

/// Main error type for feed operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// The base URL is not an http(s) URL
    #[error("Invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),

    /// HTTP request failed or returned a non-success status
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Both requests did not complete before the deadline
    #[error("Timed out after {0:?} waiting for the feed")]
    Timeout(Duration),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
