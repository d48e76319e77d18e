//! API Error Types
//!
//! Errors surfaced by [`ActivityApi`](super::ActivityApi) implementations.
//! The variants follow the failure taxonomy the synchronizer reacts to:
//! a transport failure, a server rejection with a readable detail, a
//! rejection whose body is only worth logging, and an undecodable body.

use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status with a decoded JSON error body
    #[error("Request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// Non-success status; the body is kept for diagnostics only
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
