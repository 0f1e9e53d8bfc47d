//! Health check operations.

use serde::{Deserialize, Serialize};

use super::DeparturesClient;
use crate::error::Result;

/// Response of `GET /healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    pub table: Option<String>,
}

impl DeparturesClient {
    /// Fetch the gateway health report.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response).await
    }
}
