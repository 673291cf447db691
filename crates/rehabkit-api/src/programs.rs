//! Program management operations

use std::sync::Arc;

use tracing::error;

use rehabkit_http::{ApiError, ApiTransport, ErrorKind, Result};

use crate::codec::{decode, encode};
use crate::types::{Envelope, Program};

/// Program endpoints of the RehabKit API
#[derive(Clone)]
pub struct ProgramsApi {
    transport: Arc<dyn ApiTransport>,
}

impl ProgramsApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a page of programs, optionally filtered by category.
    /// An empty category is omitted from the query string.
    pub async fn list(&self, page: u32, limit: u32, category: &str) -> Result<Vec<Program>> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("category".to_string(), category.to_string()),
        ];
        let body = self.transport.get("/programs", &query).await?;
        let envelope: Envelope<Vec<Program>> = decode(&body)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch a single program by id
    pub async fn get(&self, program_id: &str) -> Result<Program> {
        let body = self
            .transport
            .get(&format!("/programs/{program_id}"), &[])
            .await?;
        single(&body)
    }

    /// Create a program
    pub async fn create(&self, program: &Program) -> Result<Program> {
        let payload = encode(program)?;
        let body = self.transport.post("/programs", Some(&payload)).await?;
        single(&body)
    }

    /// Update a program by id
    pub async fn update(&self, program_id: &str, program: &Program) -> Result<Program> {
        let payload = encode(program)?;
        let body = self
            .transport
            .put(&format!("/programs/{program_id}"), Some(&payload))
            .await?;
        single(&body)
    }

    /// Delete a program by id
    pub async fn delete(&self, program_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/programs/{program_id}"))
            .await?;
        Ok(())
    }
}

fn single(body: &str) -> Result<Program> {
    let envelope: Envelope<Program> = decode(body)?;
    envelope.data.ok_or_else(|| {
        error!("program response carried no data");
        ApiError::new(ErrorKind::Unknown, "Program response carried no data", 0)
    })
}
