//! Client (patient) management operations

use std::sync::Arc;

use tracing::error;

use rehabkit_http::{ApiError, ApiTransport, ErrorKind, Result};

use crate::codec::{decode, encode};
use crate::types::{Client, Envelope};

/// Client endpoints of the RehabKit API
#[derive(Clone)]
pub struct ClientsApi {
    transport: Arc<dyn ApiTransport>,
}

impl ClientsApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a page of clients, optionally filtered by a search term
    pub async fn list(&self, page: u32, limit: u32, search: &str) -> Result<Vec<Client>> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("search".to_string(), search.to_string()),
        ];
        let body = self.transport.get("/clients", &query).await?;
        let envelope: Envelope<Vec<Client>> = decode(&body)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch a single client by id
    pub async fn get(&self, client_id: &str) -> Result<Client> {
        let body = self
            .transport
            .get(&format!("/clients/{client_id}"), &[])
            .await?;
        single(&body)
    }

    /// Create a client record
    pub async fn create(&self, client: &Client) -> Result<Client> {
        let payload = encode(client)?;
        let body = self.transport.post("/clients", Some(&payload)).await?;
        single(&body)
    }

    /// Update a client record by id
    pub async fn update(&self, client_id: &str, client: &Client) -> Result<Client> {
        let payload = encode(client)?;
        let body = self
            .transport
            .put(&format!("/clients/{client_id}"), Some(&payload))
            .await?;
        single(&body)
    }

    /// Delete a client record by id
    pub async fn delete(&self, client_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/clients/{client_id}"))
            .await?;
        Ok(())
    }
}

fn single(body: &str) -> Result<Client> {
    let envelope: Envelope<Client> = decode(body)?;
    envelope.data.ok_or_else(|| {
        error!("client response carried no data");
        ApiError::new(ErrorKind::Unknown, "Client response carried no data", 0)
    })
}
