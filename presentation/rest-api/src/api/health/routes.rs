use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::health::use_cases::check_readiness::CheckReadinessUseCase;

use crate::api::health::dto::{
    HealthCheckResponse, NotReadyResponse, ReadinessResponse, ReadyResponse,
};
use crate::api::tags::ApiTags;

/// Health API for monitoring and infrastructure checks
///
/// Liveness and readiness are kept apart: a process can be alive while its
/// database is not reachable yet.
pub struct HealthApi {
    check_readiness_use_case: Arc<dyn CheckReadinessUseCase>,
}

impl HealthApi {
    pub fn new(check_readiness_use_case: Arc<dyn CheckReadinessUseCase>) -> Self {
        Self {
            check_readiness_use_case,
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    ///
    /// Reports that the process is up. Never checks dependencies.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            time: Utc::now(),
        })
    }

    /// Readiness probe
    ///
    /// Pings the database with a 2 second deadline.
    ///
    /// ## Response
    /// - `200`: database reachable
    /// - `503`: database unreachable, `error` carries the reason
    #[oai(path = "/ready", method = "get", tag = "ApiTags::Health")]
    async fn readiness_check(&self) -> ReadinessResponse {
        match self.check_readiness_use_case.execute().await {
            Ok(()) => ReadinessResponse::Ready(Json(ReadyResponse {
                status: "ready".to_string(),
                database: "connected".to_string(),
                time: Utc::now(),
            })),
            Err(err) => ReadinessResponse::NotReady(Json(NotReadyResponse {
                status: "not ready".to_string(),
                database: "unavailable".to_string(),
                error: err.to_string(),
                time: Utc::now(),
            })),
        }
    }
}
