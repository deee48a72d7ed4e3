// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{convert_handler, health_handler, method_not_allowed_handler, metrics_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::inference::InferenceClient;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub inference: Arc<dyn InferenceClient>,
}

pub fn create_router(config: AppConfig, inference: Arc<dyn InferenceClient>) -> Result<Router> {
    let max_body_bytes = config.server.max_body_bytes;
    let state = AppState {
        config: Arc::new(config),
        inference,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    // OPTIONS never reaches the method router: the CORS layer answers it
    let convert_route = post(convert_handler).fallback(method_not_allowed_handler);

    let app = Router::new()
        .route("/", convert_route.clone())
        .route("/api/image-to-sabre", convert_route)
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Screenshots arrive as base64 data URLs of up to 4M chars. Oversized
        // bodies surface as a body rejection so the handler can answer 413 JSON.
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        // Outside everything that can reject, so every response is CORS-readable
        .layer(cors_layer())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
