//! Route table
//!
//! Shared by the binary and the integration tests so both serve the exact same app.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::config::MockConfig;
use crate::middleware::request_id_middleware;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Build the mock backend router
pub fn build_router(mock: MockConfig) -> Router {
    let upload_limit = DefaultBodyLimit::max(mock.upload_limit_bytes);

    Router::new()
        .route("/health", get(health_check))
        .route("/consent", post(api::consent::consent))
        .route("/files", post(api::files::upload_file).layer(upload_limit))
        .route("/chat/send", post(api::chat::send_message))
        .route("/chat/reset", post(api::chat::reset_chat))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(Arc::new(mock))
}

/// Serve the mock backend on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, mock: MockConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(mock))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
