//! DTOs for health check endpoints.

use serde::Serialize;

/// Response of the root liveness probe.
#[derive(Debug, Serialize)]
pub struct RootHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Response of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    /// Number of links currently held in the store.
    pub links: usize,
}
