//! Activities API contract
//!
//! Client side of the three activity endpoints.
//!
//! # Endpoints
//!
//! - `GET /activities` - Full catalog, a JSON object keyed by activity name
//! - `POST /activities/{name}/signup?email={email}` - Register a participant
//! - `DELETE /activities/{name}/participants?email={email}` - Remove a participant
//!
//! Activity names and emails are percent-encoded into the path and query.
//!
//! The [`ActivityApi`] trait is the seam between the synchronizer and the
//! transport. Implementations exist for reqwest (native, behind the
//! `native` feature) and for gloo-net in the browser crate.

#[cfg(feature = "native")]
pub mod client;
pub mod dto;
pub mod error;

#[cfg(feature = "native")]
pub use client::HttpActivityClient;
pub use dto::{
    decode_catalog, decode_signup, decode_unregister, ErrorBody, RawResponse, SignupResponse,
};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::catalog::Catalog;

/// Transport for the activity endpoints.
///
/// Futures are not required to be `Send`; the browser runs everything on
/// one thread.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// Fetch the full catalog
    async fn list_activities(&self) -> ApiResult<Catalog>;

    /// Register `email` for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupResponse>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()>;
}

/// URL of the listing endpoint
pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

/// URL of the signup endpoint for one activity and email
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        activities_url(base),
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// URL of the participant removal endpoint
pub fn participants_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        activities_url(base),
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_url() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(activities_url("http://localhost:8000/"), "http://localhost:8000/activities");
    }

    #[test]
    fn test_signup_url_encodes_name_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_participants_url_encodes_reserved_characters() {
        assert_eq!(
            participants_url("http://api", "Art/Design & Co", "x@y.org"),
            "http://api/activities/Art%2FDesign%20%26%20Co/participants?email=x%40y.org"
        );
    }
}
