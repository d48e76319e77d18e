//! Response DTOs and body decoding
//!
//! Both HTTP clients (reqwest natively, gloo-net in the browser) read the
//! status and the raw body text, then hand them to the functions here so
//! the status/body rules live in one place.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::catalog::Catalog;

/// Successful signup body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body returned on a rejected request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Usually a string; validation failures may send a structured value
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The detail when it is a plain string
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Status line and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decode the listing response
pub fn decode_catalog(response: &RawResponse) -> ApiResult<Catalog> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body.clone(),
        });
    }

    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the signup response.
///
/// A failure body that is not JSON is a decode error, not a rejection.
pub fn decode_signup(response: &RawResponse) -> ApiResult<SignupResponse> {
    if response.is_success() {
        return serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body: ErrorBody =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;

    Err(ApiError::Rejected {
        status: response.status,
        detail: body.detail_text(),
    })
}

/// Check the unregister response; any success status will do
pub fn decode_unregister(response: &RawResponse) -> ApiResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.body.clone(),
        })
    }
}
