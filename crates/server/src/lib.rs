//! Minimal HTTP service with a root greeting and a health check.
//!
//! Both endpoints return fixed JSON payloads; any other path gets a JSON 404.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::check))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on the configured address.
pub async fn bind(config: &Config) -> error::Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "starting server");
    }

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
