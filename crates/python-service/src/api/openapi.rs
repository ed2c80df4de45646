//! OpenAPI documentation configuration.
//!
//! Served as JSON alongside a Swagger UI for exploring the endpoints.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, root_handler};

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Python Service",
        version = "0.1.0",
        description = "Python microservice with LangChain/LangGraph"
    ),
    paths(
        root_handler::root,
        health_handler::health_check,
        health_handler::readiness_check,
    ),
    components(
        schemas(
            root_handler::ServiceInfo,
            health_handler::LivenessStatus,
            health_handler::ReadinessStatus,
        )
    ),
    tags(
        (name = "Service", description = "Service identity"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
