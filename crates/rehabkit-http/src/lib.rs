//! HTTP transport core for the RehabKit SDK
//!
//! Owns everything between a domain API call and the wire: URL construction,
//! auth-header injection, per-request timeouts, and the mapping from raw
//! transport outcomes to the SDK error taxonomy.
//!
//! ## Features
//!
//! - **Trait-based design**: callers depend on [`ApiTransport`], implemented
//!   by the real [`HttpClient`] and by [`MockTransport`] in tests
//! - **Uniform results**: every request resolves exactly once with the raw
//!   response body or a classified [`ApiError`]
//! - **Live configuration**: base URL, API key and timeout may be changed at
//!   any time and apply to subsequent requests

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod transport;
pub mod url;

pub use client::{shared_client, HttpClient};
pub use config::HttpConfig;
pub use error::{classify, ApiError, ErrorKind, Result};
pub use mock::{MockResponse, MockTransport, RequestRecord};
pub use transport::ApiTransport;
pub use url::build_url;

/// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
