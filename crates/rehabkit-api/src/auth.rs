//! Authentication operations

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};

use rehabkit_http::{ApiError, ApiTransport, ErrorKind, Result};

use crate::codec::{decode, encode};
use crate::types::{AuthTokens, Envelope, LoginRequest};

/// Authentication endpoints of the RehabKit API
#[derive(Clone)]
pub struct AuthApi {
    transport: Arc<dyn ApiTransport>,
}

impl AuthApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Exchange credentials for access and refresh tokens
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthTokens> {
        let payload = encode(request)?;
        let body = self.transport.post("/auth/login", Some(&payload)).await?;
        let tokens = Self::tokens_from(&body)?;
        debug!("login succeeded for {}", request.email);
        Ok(tokens)
    }

    /// Invalidate the current session server-side
    pub async fn logout(&self) -> Result<()> {
        self.transport.post("/auth/logout", None).await?;
        Ok(())
    }

    /// Trade a refresh token for a new token pair
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthTokens> {
        let payload = json!({ "refreshToken": refresh_token }).to_string();
        let body = self.transport.post("/auth/refresh", Some(&payload)).await?;
        Self::tokens_from(&body)
    }

    /// Request a password-reset email
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let payload = json!({ "email": email }).to_string();
        self.transport
            .post("/auth/forgot-password", Some(&payload))
            .await?;
        Ok(())
    }

    /// Complete a password reset with the emailed token
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let payload = json!({ "token": token, "password": new_password }).to_string();
        self.transport
            .post("/auth/reset-password", Some(&payload))
            .await?;
        Ok(())
    }

    /// Change the password of the authenticated user
    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        let payload = json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        })
        .to_string();
        self.transport
            .post("/auth/change-password", Some(&payload))
            .await?;
        Ok(())
    }

    fn tokens_from(body: &str) -> Result<AuthTokens> {
        let envelope: Envelope<AuthTokens> = decode(body)?;
        envelope.data.ok_or_else(|| {
            error!("auth response carried no token data");
            ApiError::new(ErrorKind::Unknown, "Auth response carried no token data", 0)
        })
    }
}
