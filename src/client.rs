//! The ADS API client.

use crate::error::{AdsError, Result};
use crate::rate_limit::{RateLimitSnapshot, RateLimitTracker};
use reqwest::Client;
use std::time::Duration;

/// Async client for the ADS API.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> pads::error::Result<()> {
/// use pads::{AdsClient, QueryParams};
///
/// let client = AdsClient::from_env()?;
/// let params = QueryParams {
///     author: Some("doe, j".to_string()),
///     ..QueryParams::default()
/// };
/// let results = client.search(&params).await?;
/// for paper in &results.papers {
///     println!("{:?}", paper.bibcode);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdsClient {
    pub(crate) http: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
    pub(crate) rate_limit: RateLimitTracker,
}

impl AdsClient {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_token: api_token.into(),
            base_url: "https://api.adsabs.harvard.edu/v1".to_string(),
            rate_limit: RateLimitTracker::new(),
        }
    }

    /// Create a client from the `ADS_API_TOKEN` (or legacy `ADS_DEV_KEY`)
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("ADS_API_TOKEN")
            .or_else(|_| std::env::var("ADS_DEV_KEY"))
            .map_err(|_| AdsError::AuthRequired)?;
        if token.is_empty() {
            return Err(AdsError::AuthRequired);
        }
        Ok(Self::new(token))
    }

    /// Override the base URL (useful for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Rate-limit headers recorded from the most recent response.
    pub fn rate_limit(&self) -> RateLimitSnapshot {
        self.rate_limit.snapshot()
    }

    /// Make an authenticated GET request to the ADS API.
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("User-Agent", concat!("pads/", env!("CARGO_PKG_VERSION")))
            .query(params)
            .send()
            .await?;

        self.rate_limit.update_from_headers(response.headers());
        handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("User-Agent", concat!("pads/", env!("CARGO_PKG_VERSION")))
            .json(body)
            .send()
            .await?;

        self.rate_limit.update_from_headers(response.headers());
        handle_response(response).await
    }
}

/// Handle the HTTP response, mapping status codes to errors.
async fn handle_response(response: reqwest::Response) -> Result<String> {
    let status = response.status().as_u16();

    match status {
        200..=299 => Ok(response.text().await?),
        401 => Err(AdsError::AuthRequired),
        404 => Err(AdsError::NotFound("Resource not found".to_string())),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            Err(AdsError::RateLimited { retry_after })
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(AdsError::Api {
                status,
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let client = AdsClient::new("token");
        assert_eq!(client.base_url, "https://api.adsabs.harvard.edu/v1");
    }

    #[test]
    fn test_with_base_url() {
        let client = AdsClient::new("token").with_base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
