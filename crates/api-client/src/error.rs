//! Client error type.

use reqwest::StatusCode;

/// Errors produced by [`crate::ApiClient`] calls.
///
/// Transport failures and non-success statuses are distinct variants so the
/// import flow can tell a duplicate record from a dead backend, but the
/// interactive surface treats them identically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection refused,
    /// DNS failure, malformed body, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("{operation} returned {status}: {detail}")]
    Status {
        /// The client operation that observed the status.
        operation: &'static str,
        /// The HTTP status the backend answered with.
        status: StatusCode,
        /// Response body text, if any could be read.
        detail: String,
    },
}

impl ApiError {
    /// True when the backend reported a conflicting identifier (409).
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::CONFLICT)
    }

    /// True when the backend reported a missing record (404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
