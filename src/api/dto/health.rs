//! DTOs for health check endpoint.

use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    /// Whole seconds since the process started.
    pub uptime: u64,
}
