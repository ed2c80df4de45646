//! Health check handlers.
//!
//! Neither probe inspects a dependency. Readiness is reserved for a future
//! database connectivity check and currently reports ready unconditionally.

use axum::{
    response::{Json, Redirect},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::config::{
    HEALTH_PREFIX, LIVENESS_PATH, READINESS_PATH, READINESS_SLASH_PATH, SERVICE_NAME,
    STATUS_HEALTHY, STATUS_READY,
};
use crate::types::ApiResponse;

/// Liveness payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LivenessStatus {
    /// Always "healthy"
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
    pub service: String,
}

/// Readiness payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReadinessStatus {
    /// Always "ready"
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
}

/// Current UTC time with microsecond precision and a `Z` suffix.
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Create health routes.
///
/// Paths are absolute: `nest` would collapse the liveness path's trailing
/// slash, so the router is merged at the root instead.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route(HEALTH_PREFIX, get(redirect_to_liveness))
        .route(LIVENESS_PATH, get(health_check))
        .route(READINESS_PATH, get(readiness_check))
        .route(READINESS_SLASH_PATH, get(redirect_to_readiness))
}

/// `/health` without the slash redirects to the liveness probe.
async fn redirect_to_liveness() -> Redirect {
    Redirect::temporary(LIVENESS_PATH)
}

/// `/health/ready/` redirects to the readiness probe.
async fn redirect_to_readiness() -> Redirect {
    Redirect::temporary(READINESS_PATH)
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health/",
    tag = "Health",
    responses(
        (status = 200, description = "Process is up; `data` carries the liveness status",
            body = LivenessStatus,
            example = json!({
                "success": true,
                "data": {
                    "status": "healthy",
                    "timestamp": "2024-01-01T00:00:00.000000Z",
                    "service": "python-service"
                }
            }))
    )
)]
pub async fn health_check() -> Json<ApiResponse<LivenessStatus>> {
    Json(ApiResponse::success(LivenessStatus {
        status: STATUS_HEALTHY.to_string(),
        timestamp: utc_timestamp(),
        service: SERVICE_NAME.to_string(),
    }))
}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready to serve; `data` carries the readiness status",
            body = ReadinessStatus,
            example = json!({
                "success": true,
                "data": {
                    "status": "ready",
                    "timestamp": "2024-01-01T00:00:00.000000Z"
                }
            }))
    )
)]
pub async fn readiness_check() -> Json<ApiResponse<ReadinessStatus>> {
    // TODO: ping DATABASE_URL once a connection pool is wired into AppState
    Json(ApiResponse::success(ReadinessStatus {
        status: STATUS_READY.to_string(),
        timestamp: utc_timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let stamp = utc_timestamp();
        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();

        assert!(stamp.ends_with('Z'));
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[tokio::test]
    async fn liveness_reports_service_name() {
        let Json(response) = health_check().await;

        assert!(response.success);
        assert_eq!(response.data.status, "healthy");
        assert_eq!(response.data.service, "python-service");
    }

    #[tokio::test]
    async fn readiness_omits_service_name() {
        let Json(response) = readiness_check().await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["data"]["status"], "ready");
        assert!(value["data"].get("service").is_none());
    }
}
