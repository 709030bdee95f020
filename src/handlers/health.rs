//! Health check and service metadata endpoints.

use axum::Json;
use serde::Serialize;

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Account REST API Service";

/// API version reported by `GET /`.
pub const SERVICE_VERSION: &str = "1.0";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,
}

/// Root metadata response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "OK" }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

/// Root URL handler.
///
/// # Response (200 OK)
///
/// ```json
/// { "name": "Account REST API Service", "version": "1.0" }
/// ```
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}
