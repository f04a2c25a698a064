//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / — returns the service greeting.
#[tracing::instrument]
pub async fn index() -> Json<RootResponse> {
    metrics::counter!("http_requests_total", "route" => "/").increment(1);
    Json(RootResponse {
        message: "Hello from ECS Express Mode!",
        status: "running",
    })
}
