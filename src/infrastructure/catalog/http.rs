//! Shared JSON-over-HTTP plumbing for the catalog adapters

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::domain::error::FetchError;

/// GET-only JSON client rooted at an API base URL
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
    base_url: String,
}

impl JsonClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        // Reject unusable base URLs up front instead of on the first fetch
        Url::parse(base_url).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for `path` (which starts with `/`) with the query pairs appended
    pub fn endpoint<K, V>(&self, path: &str, query: &[(K, V)]) -> Result<Url, FetchError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Fetch `url` and decode its JSON body
    ///
    /// Non-2xx statuses become [`FetchError::BadResponse`] and are never decoded.
    pub async fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Catalog returned an error status");
            return Err(FetchError::BadResponse {
                status: Some(status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Classify a reqwest failure into the fetch error taxonomy
pub fn map_reqwest_error(error: reqwest::Error) -> FetchError {
    if error.is_status() {
        return FetchError::BadResponse {
            status: error.status().map(|status| status.as_u16()),
        };
    }
    if error.is_decode() {
        return FetchError::Decode(error.to_string());
    }
    if error.is_builder() {
        return FetchError::InvalidRequest(error.to_string());
    }
    FetchError::Transport(error.to_string())
}
