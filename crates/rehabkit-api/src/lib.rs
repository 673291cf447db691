//! Typed domain APIs for the RehabKit rehabilitation platform
//!
//! Thin pass-throughs over the transport core: each surface serializes its
//! request, hands JSON text to an [`ApiTransport`], and decodes the response
//! envelope. All failures arrive as the transport's classified
//! [`ApiError`](rehabkit_http::ApiError); nothing here throws.

pub mod api;
pub mod auth;
pub mod clients;
pub mod codec;
pub mod programs;
pub mod types;
pub mod users;

pub use api::RehabKit;
pub use auth::AuthApi;
pub use clients::ClientsApi;
pub use programs::ProgramsApi;
pub use types::{
    Address, AuthTokens, Client, CreateUserRequest, Envelope, Exercise, LoginRequest, Program,
    User,
};
pub use users::UsersApi;

/// Re-export the transport contract and error types callers interact with
pub use rehabkit_http::{ApiError, ApiTransport, ErrorKind, HttpConfig, Result};
