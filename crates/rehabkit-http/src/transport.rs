//! Transport contract shared by the real client and the mock

use async_trait::async_trait;

use crate::error::Result;

/// A transport capable of performing RehabKit API requests.
///
/// Implemented over the network by [`HttpClient`](crate::HttpClient) and
/// without one by [`MockTransport`](crate::MockTransport); callers hold an
/// `Arc<dyn ApiTransport>` and never depend on a concrete client.
///
/// Every call resolves exactly once with either the raw response body or a
/// classified [`ApiError`](crate::ApiError). Bodies are pre-serialized JSON
/// text; the transport never inspects request payloads.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute a GET request; query pairs with empty values are omitted
    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<String>;

    /// Execute a POST request with an optional JSON body
    async fn post(&self, endpoint: &str, body: Option<&str>) -> Result<String>;

    /// Execute a PUT request with an optional JSON body
    async fn put(&self, endpoint: &str, body: Option<&str>) -> Result<String>;

    /// Execute a DELETE request
    async fn delete(&self, endpoint: &str) -> Result<String>;
}
