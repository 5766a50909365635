//! Health endpoint payloads.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Per-dependency results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub generation: ComponentCheck,
    pub sessions: SessionCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

/// Whether article generation is configured.
#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub message: &'static str,
}

/// Session store occupancy.
#[derive(Debug, Serialize)]
pub struct SessionCheck {
    pub status: ComponentStatus,
    pub active: usize,
}
