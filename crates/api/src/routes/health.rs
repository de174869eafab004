//! Liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health: answers while the process is serving requests. Never
/// touches the store and is not behind authentication.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
