//! HTTP client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{header, Method};
use tracing::{debug, warn};

use crate::{
    config::HttpConfig,
    error::{classify, Result},
    transport::ApiTransport,
    url::build_url,
};

/// Production transport backed by reqwest
pub struct HttpClient {
    inner: reqwest::Client,
    config: RwLock<HttpConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config: RwLock::new(config),
        }
    }

    /// Create an HTTP client with default configuration
    pub fn with_defaults() -> Self {
        Self::new(HttpConfig::default())
    }

    /// Replace the base URL; affects requests issued after the call
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        self.config.write().base_url = base_url.into();
    }

    /// Replace the API key; affects requests issued after the call
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.config.write().api_key = Some(api_key.into());
    }

    /// Replace the per-request timeout; affects requests issued after the call
    pub fn set_timeout(&self, timeout: Duration) {
        self.config.write().timeout = timeout;
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> HttpConfig {
        self.config.read().clone()
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&str>,
        query: &[(String, String)],
    ) -> Result<String> {
        // Each request captures the configuration once; later setter calls
        // only affect requests issued after them.
        let config = self.config.read().clone();
        let url = build_url(&config.base_url, endpoint, query);
        debug!("HTTP {}: {}", method, url);

        let mut request = self
            .inner
            .request(method, url.as_str())
            .timeout(config.timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(token) = config.bearer() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("request to {} failed: {}", url, error);
                return Err(classify(false, None, ""));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify(true, Some(status.as_u16()), &body))
        }
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<String> {
        self.send(Method::GET, endpoint, None, query).await
    }

    async fn post(&self, endpoint: &str, body: Option<&str>) -> Result<String> {
        self.send(Method::POST, endpoint, body, &[]).await
    }

    async fn put(&self, endpoint: &str, body: Option<&str>) -> Result<String> {
        self.send(Method::PUT, endpoint, body, &[]).await
    }

    async fn delete(&self, endpoint: &str) -> Result<String> {
        self.send(Method::DELETE, endpoint, None, &[]).await
    }
}

/// Create a shared transport (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Arc<dyn ApiTransport> {
    Arc::new(HttpClient::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = HttpClient::with_defaults();
        assert_eq!(client.config().base_url, "https://api-dev.rehabkit.io");
    }

    #[test]
    fn test_setters_update_config() {
        let client = HttpClient::with_defaults();
        client.set_base_url("https://api.rehabkit.io");
        client.set_api_key("rk_live_123");
        client.set_timeout(Duration::from_secs(5));

        let config = client.config();
        assert_eq!(config.base_url, "https://api.rehabkit.io");
        assert_eq!(config.bearer(), Some("rk_live_123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_set_api_key_is_idempotent() {
        let client = HttpClient::with_defaults();
        client.set_api_key("rk_live_123");
        let once = client.config();
        client.set_api_key("rk_live_123");
        let twice = client.config();
        assert_eq!(once.bearer(), twice.bearer());
    }

    #[test]
    fn test_shared_client_creation() {
        let transport = shared_client(HttpConfig::default());
        let _clone = transport.clone();
    }
}
