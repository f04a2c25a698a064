//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness probe, unconditionally healthy.
#[tracing::instrument]
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse { status: "healthy" })
}
