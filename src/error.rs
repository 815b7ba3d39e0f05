//! Unified SDK error types.
//!
//! Only the collaborators around the engine can fail: fetching and parsing a
//! snapshot. Reconciliation itself never returns an error; malformed records
//! are neutralized during wire → domain conversion.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// The upstream body could not be normalized into category sections.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Body is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("Unexpected snapshot shape: {0}")]
    UnexpectedShape(String),
}
