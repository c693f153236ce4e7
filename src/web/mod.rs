// Web server: Axum-based JSON API over the classification engine.
//
// Three routes do the work (/predict, /feedback, /health) plus a root
// route that reports service metadata. CORS is wide open because the
// API is meant to be called from browser extensions and third-party
// pages; there is no session state to protect.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::engine::Engine;
use crate::feedback::FeedbackStore;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub feedback: Arc<dyn FeedbackStore>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    engine: Arc<Engine>,
    feedback: Arc<dyn FeedbackStore>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState { engine, feedback };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Weir listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the full router. Public so integration tests can drive it
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::meta::service_info))
        .route("/health", get(health))
        .route("/predict", post(handlers::predict::predict))
        .route("/feedback", post(handlers::feedback::submit_feedback))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check; always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
