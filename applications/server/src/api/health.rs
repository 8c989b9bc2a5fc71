/// Health check API routes
use axum::Json;
use serde::Serialize;

/// Body of the root liveness response
pub const LIVENESS_MESSAGE: &str = "Hello, server is up and running...";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET / - Plaintext liveness check
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /api/health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
