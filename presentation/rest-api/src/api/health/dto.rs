use chrono::{DateTime, Utc};
use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process is serving
    pub status: String,
    /// Current server time (UTC)
    pub time: DateTime<Utc>,
}

/// Readiness response when every dependency answered
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReadyResponse {
    /// "ready"
    pub status: String,
    /// "connected"
    pub database: String,
    /// Current server time (UTC)
    pub time: DateTime<Utc>,
}

/// Readiness response when a dependency failed its check
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct NotReadyResponse {
    /// "not ready"
    pub status: String,
    /// "unavailable"
    pub database: String,
    /// Reason reported by the failing dependency
    pub error: String,
    /// Current server time (UTC)
    pub time: DateTime<Utc>,
}

#[derive(ApiResponse)]
pub enum ReadinessResponse {
    #[oai(status = 200)]
    Ready(Json<ReadyResponse>),
    #[oai(status = 503)]
    NotReady(Json<NotReadyResponse>),
}
