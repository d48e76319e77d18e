//! Activities REST API Client
//!
//! reqwest-backed [`ActivityApi`] for native consumers.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::dto::{decode_catalog, decode_signup, decode_unregister, RawResponse, SignupResponse};
use super::error::{ApiError, ApiResult};
use super::{activities_url, participants_url, signup_url, ActivityApi};
use crate::catalog::Catalog;
use crate::config::ApiConfig;

/// HTTP client for the activities API
#[derive(Debug, Clone)]
pub struct HttpActivityClient {
    client: Client,
    base_url: String,
}

impl HttpActivityClient {
    /// Create a client from configuration.
    ///
    /// Requests carry no timeout unless `request_timeout_secs` is set.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all endpoint paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<RawResponse> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(RawResponse::new(status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityClient {
    async fn list_activities(&self) -> ApiResult<Catalog> {
        let url = activities_url(&self.base_url);
        let response = self.execute(self.client.get(&url)).await?;
        decode_catalog(&response)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupResponse> {
        let url = signup_url(&self.base_url, activity, email);
        let response = self.execute(self.client.post(&url)).await?;
        decode_signup(&response)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let url = participants_url(&self.base_url, activity, email);
        let response = self.execute(self.client.delete(&url)).await?;
        decode_unregister(&response)
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("Request timeout".to_string())
    } else if e.is_connect() {
        ApiError::Network(format!("Connection failed: {}", e))
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}
