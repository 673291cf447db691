//! User management operations

use std::sync::Arc;

use tracing::error;

use rehabkit_http::{ApiError, ApiTransport, ErrorKind, Result};

use crate::codec::{decode, encode};
use crate::types::{CreateUserRequest, Envelope, User};

/// User endpoints of the RehabKit API
#[derive(Clone)]
pub struct UsersApi {
    transport: Arc<dyn ApiTransport>,
}

impl UsersApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a page of users, optionally filtered by a search term.
    /// An empty search term is omitted from the query string.
    pub async fn list(&self, page: u32, limit: u32, search: &str) -> Result<Vec<User>> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("search".to_string(), search.to_string()),
        ];
        let body = self.transport.get("/users", &query).await?;
        let envelope: Envelope<Vec<User>> = decode(&body)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch a single user by id
    pub async fn get(&self, user_id: &str) -> Result<User> {
        let body = self
            .transport
            .get(&format!("/users/{user_id}"), &[])
            .await?;
        single(&body)
    }

    /// Create a user
    pub async fn create(&self, request: &CreateUserRequest) -> Result<User> {
        let payload = encode(request)?;
        let body = self.transport.post("/users", Some(&payload)).await?;
        single(&body)
    }

    /// Update a user by id
    pub async fn update(&self, user_id: &str, user: &User) -> Result<User> {
        let payload = encode(user)?;
        let body = self
            .transport
            .put(&format!("/users/{user_id}"), Some(&payload))
            .await?;
        single(&body)
    }

    /// Delete a user by id
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/users/{user_id}"))
            .await?;
        Ok(())
    }
}

fn single(body: &str) -> Result<User> {
    let envelope: Envelope<User> = decode(body)?;
    envelope.data.ok_or_else(|| {
        error!("user response carried no data");
        ApiError::new(ErrorKind::Unknown, "User response carried no data", 0)
    })
}
