use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Root message response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Static liveness message
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status (always "ok" — the service holds no state that can degrade)
    pub status: String,
    /// API version
    pub version: String,
}

/// Root endpoint, confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = RootResponse),
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "HikerHunger API is running".to_string(),
    })
}

/// Health check endpoint.
///
/// Returns the API status and version. The service is stateless and has no
/// downstream dependencies to probe, so responding at all is the health
/// signal.
#[utoipa::path(
    get,
    path = "/v1/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
