//! reqwest-backed [`ApiClient`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tokio::time;
use url::Url;

use crate::client::{ApiClient, ClientError, ResponsePayload};
use crate::config::ApiConfig;

/// HTTP adapter that resolves paths against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append `path` to the base URL with exactly one separating slash.
    pub fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        let path = path.trim_start_matches('/');
        let joined = format!("{}/{}", self.base_url, path);
        Url::parse(&joined).map_err(|source| ClientError::InvalidUrl {
            url: joined,
            source,
        })
    }

    async fn fetch(&self, url: Url) -> Result<ResponsePayload, ClientError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        Ok(ResponsePayload::new(value))
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn get(&self, path: &str) -> Result<ResponsePayload, ClientError> {
        let url = self.resolve(path)?;
        tracing::debug!(url = %url, "GET");

        let result = match time::timeout(self.timeout, self.fetch(url.clone())).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(self.timeout)),
        };

        if let Err(e) = &result {
            tracing::warn!(url = %url, error = %e, "Request failed");
        }
        result
    }
}
