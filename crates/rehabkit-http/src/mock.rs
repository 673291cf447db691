//! Mock transport for deterministic tests
//!
//! [`MockTransport`] implements the same [`ApiTransport`] contract as the
//! real client, resolving every request from a one-shot queue, a rule table
//! keyed by method and endpoint, or a default success body, and recording
//! each request it observes. No network access is involved.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use reqwest::Method;

use crate::error::{ApiError, ErrorKind, Result};
use crate::transport::ApiTransport;

const DEFAULT_SUCCESS_BODY: &str = r#"{"success":true,"data":{}}"#;

/// Canned outcome returned by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct MockResponse {
    outcome: Result<String>,
    delay: Duration,
}

impl MockResponse {
    /// A successful response carrying the given raw body
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(body.into()),
            delay: Duration::ZERO,
        }
    }

    /// A failed response carrying the given error
    pub fn failure(error: ApiError) -> Self {
        Self {
            outcome: Err(error),
            delay: Duration::ZERO,
        }
    }

    /// Simulated latency, honored only while delay simulation is enabled
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn default_success() -> Self {
        Self::success(DEFAULT_SUCCESS_BODY)
    }
}

/// One request observed by the mock
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: Method,
    pub endpoint: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
struct MockState {
    rules: HashMap<(Method, String), MockResponse>,
    queue: VecDeque<MockResponse>,
    log: Vec<RequestRecord>,
    delay_enabled: bool,
}

/// Drop-in [`ApiTransport`] substitute for tests
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for requests matching method and endpoint.
    /// The last registration for a key wins.
    pub fn set_response(&self, method: Method, endpoint: impl Into<String>, response: MockResponse) {
        self.state
            .lock()
            .rules
            .insert((method, endpoint.into()), response);
    }

    /// Queue a response consumed by exactly the next request, regardless of
    /// endpoint. Queued responses take priority over registered rules.
    pub fn push_next(&self, response: MockResponse) {
        self.state.lock().queue.push_back(response);
    }

    /// Enable or disable simulated latency
    pub fn set_network_delay_enabled(&self, enabled: bool) {
        self.state.lock().delay_enabled = enabled;
    }

    /// Number of observed requests matching method and endpoint
    pub fn request_count(&self, method: Method, endpoint: &str) -> usize {
        self.state
            .lock()
            .log
            .iter()
            .filter(|record| record.method == method && record.endpoint == endpoint)
            .count()
    }

    /// Total number of observed requests
    pub fn total_request_count(&self) -> usize {
        self.state.lock().log.len()
    }

    /// Body of the most recent request matching method and endpoint,
    /// or empty if none matched
    pub fn last_request_body(&self, method: Method, endpoint: &str) -> String {
        self.state
            .lock()
            .log
            .iter()
            .rev()
            .find(|record| record.method == method && record.endpoint == endpoint)
            .map(|record| record.body.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the request log
    pub fn requests(&self) -> Vec<RequestRecord> {
        self.state.lock().log.clone()
    }

    /// Clears the request log; registered rules and queued responses survive
    pub fn reset(&self) {
        self.state.lock().log.clear();
    }

    /// Clears registered rules and any queued one-shot responses
    pub fn clear_rules(&self) {
        let mut state = self.state.lock();
        state.rules.clear();
        state.queue.clear();
    }

    /// Registers canned success bodies for the login and refresh endpoints
    pub fn mock_auth_success(&self) {
        self.set_response(
            Method::POST,
            "/auth/login",
            MockResponse::success(
                r#"{
                    "success": true,
                    "data": {
                        "accessToken": "mock_access_token_12345",
                        "refreshToken": "mock_refresh_token_67890",
                        "user": {
                            "id": "user_123",
                            "email": "test@example.com",
                            "firstName": "Test",
                            "lastName": "User",
                            "role": "clinician"
                        }
                    }
                }"#,
            ),
        );

        self.set_response(
            Method::POST,
            "/auth/refresh",
            MockResponse::success(
                r#"{
                    "success": true,
                    "data": {
                        "accessToken": "mock_new_access_token_12345",
                        "refreshToken": "mock_new_refresh_token_67890"
                    }
                }"#,
            ),
        );
    }

    /// Registers an authentication failure for the login endpoint
    pub fn mock_auth_failure(&self) {
        self.set_response(
            Method::POST,
            "/auth/login",
            MockResponse::failure(ApiError::new(
                ErrorKind::Authentication,
                "Invalid credentials",
                401,
            )),
        );
    }

    /// Queues a one-shot network timeout for the next request
    pub fn mock_network_timeout(&self) {
        self.push_next(
            MockResponse::failure(ApiError::new(ErrorKind::Network, "Request timed out", 0))
                .with_delay(Duration::from_secs(5)),
        );
    }

    /// Queues a one-shot server error for the next request
    pub fn mock_server_error(&self) {
        self.push_next(MockResponse::failure(ApiError::new(
            ErrorKind::Server,
            "Internal server error",
            500,
        )));
    }

    async fn dispatch(&self, method: Method, endpoint: &str, body: &str) -> Result<String> {
        let (response, delay_enabled) = {
            let mut state = self.state.lock();
            state.log.push(RequestRecord {
                method: method.clone(),
                endpoint: endpoint.to_string(),
                body: body.to_string(),
                timestamp: Utc::now(),
            });

            let response = state
                .queue
                .pop_front()
                .or_else(|| state.rules.get(&(method, endpoint.to_string())).cloned())
                .unwrap_or_else(MockResponse::default_success);
            (response, state.delay_enabled)
        };

        if delay_enabled && !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        response.outcome
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, endpoint: &str, _query: &[(String, String)]) -> Result<String> {
        self.dispatch(Method::GET, endpoint, "").await
    }

    async fn post(&self, endpoint: &str, body: Option<&str>) -> Result<String> {
        self.dispatch(Method::POST, endpoint, body.unwrap_or_default())
            .await
    }

    async fn put(&self, endpoint: &str, body: Option<&str>) -> Result<String> {
        self.dispatch(Method::PUT, endpoint, body.unwrap_or_default())
            .await
    }

    async fn delete(&self, endpoint: &str) -> Result<String> {
        self.dispatch(Method::DELETE, endpoint, "").await
    }
}
