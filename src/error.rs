//! Error types for user-reports
//!
//! Two layers:
//! - [`FetchError`] covers everything that can go wrong while paging through the
//!   remote API (non-200 status, transport failure, undecodable page body). All of
//!   it is fatal for a run.
//! - [`Error`] is the crate-wide error, wrapping fetch failures alongside
//!   configuration and I/O problems.

use thiserror::Error;

/// Result type alias for user-reports operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for user-reports
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching the user collection failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "per_page")
        key: Option<String>,
    },

    /// HTTP client could not be constructed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error (writing reports, reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (config file contents)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a configuration error for a specific key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// Failure while fetching one page of users
///
/// Every variant records the 1-based page number that failed. None of them are
/// retried; the fetch loop stops at the first one and discards what it staged.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with something other than HTTP 200
    #[error("failed to fetch data: HTTP {status} (page {page}, {url})")]
    Status {
        /// Page number that was requested
        page: u64,
        /// HTTP status code returned by the API
        status: u16,
        /// Full request URL, including query parameters
        url: String,
    },

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("failed to fetch page {page}: {source}")]
    Transport {
        /// Page number that was requested
        page: u64,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a JSON array of user objects
    #[error("failed to decode page {page}: {source}")]
    Decode {
        /// Page number that was requested
        page: u64,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Page number the failure happened on
    pub fn page(&self) -> u64 {
        match self {
            FetchError::Status { page, .. }
            | FetchError::Transport { page, .. }
            | FetchError::Decode { page, .. } => *page,
        }
    }

    /// HTTP status code, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            FetchError::Decode { .. } => None,
        }
    }
}
