//! HTTP API Client
//!
//! `ActivityApi` over `gloo-net`. Bodies are read as text and handed to the
//! same decoders the native client uses, so both agree on every status and
//! error shape.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use club_signup::api::{
    activities_url, decode_catalog, decode_signup, decode_unregister, participants_url,
    signup_url,
};
use club_signup::{ActivityApi, ApiError, ApiResult, Catalog, RawResponse, SignupResponse};

/// Local storage key holding an alternative API origin
pub const API_URL_KEY: &str = "club_signup_api_url";

/// Default API base: same origin as the page
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Browser client for the activities API
#[derive(Debug, Clone)]
pub struct GlooActivityApi {
    base: String,
}

impl GlooActivityApi {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: normalize_base(base.as_ref()),
        }
    }

    /// Client for the base URL configured in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn execute(request: RequestBuilder) -> ApiResult<RawResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse::new(status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooActivityApi {
    async fn list_activities(&self) -> ApiResult<Catalog> {
        let raw = Self::execute(Request::get(&activities_url(&self.base))).await?;
        decode_catalog(&raw)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupResponse> {
        let raw = Self::execute(Request::post(&signup_url(&self.base, activity, email))).await?;
        decode_signup(&raw)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let raw =
            Self::execute(Request::delete(&participants_url(&self.base, activity, email))).await?;
        decode_unregister(&raw)
    }
}
