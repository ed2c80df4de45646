//! Root endpoint.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::config::{Settings, SERVICE_NAME, SERVICE_VERSION};

/// Service identity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    /// Deployment environment from settings
    pub environment: String,
}

impl ServiceInfo {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            environment: settings.environment.clone(),
        }
    }
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service name, version and environment", body = ServiceInfo)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::from_settings(&state.settings))
}
