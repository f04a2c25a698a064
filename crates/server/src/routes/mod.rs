//! Route handlers.

pub mod health;
pub mod root;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for any path without a registered route.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound(format!("not found: {}", uri.path()))
}
