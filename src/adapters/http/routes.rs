//! Axum router configuration for the gateway.
//!
//! # Routes
//!
//! - `GET /` - liveness check
//! - `POST /summarize` - summarize text
//! - `POST /caption` - caption an image
//! - `POST /translate` - translate text
//! - `POST /explain-code` - explain a code snippet
//! - `POST /visual-qa` - answer a question about an image

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::handlers::{caption, explain_code, health, summarize, translate, visual_qa, AppState};

/// Base64 image payloads get big; match the original's 50 MB body limit.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Create the gateway route table without middleware.
pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/summarize", post(summarize))
        .route("/caption", post(caption))
        .route("/translate", post(translate))
        .route("/explain-code", post(explain_code))
        .route("/visual-qa", post(visual_qa))
}

/// Create the complete application with middleware applied.
pub fn gateway_app(state: AppState, config: &ServerConfig) -> Router {
    gateway_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// CORS from the configured allowlist.
///
/// Falls back to a permissive layer only when no origins are configured,
/// which validation restricts to development.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("no CORS origins configured; allowing any origin");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
