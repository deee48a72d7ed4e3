// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::sabre::convert_screenshot;
use crate::utils::logging::sanitize;
use crate::vision::ImageDataUrl;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{error, info, warn};

/// Successful conversion body: `{ "sabreText": "..." }`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub sabre_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: String,
}

/// Handler for `POST /` (and the legacy `/api/image-to-sabre` path)
pub async fn convert_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();

    let response = match run_conversion(&state, body).await {
        Ok(sabre_text) => Json(ConversionResponse { sabre_text }).into_response(),
        Err(e) => {
            log_failure(&state, &e);
            metrics::record_rejection(&e);
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start.elapsed().as_secs_f64());
    response
}

async fn run_conversion(
    state: &AppState,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<String> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        _ => AppError::InvalidInput,
    })?;

    // Unparseable bodies are reported the same as a missing field
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let image = ImageDataUrl::from_request_body(&payload)?;

    info!(
        "Received conversion request: media_type={}, chars={}",
        image.media_type(),
        image.len()
    );

    convert_screenshot(state.inference.as_ref(), &image).await
}

fn log_failure(state: &AppState, e: &AppError) {
    match e {
        AppError::Upstream(failure) => {
            let detail = format!(
                "status={:?} api_message={:?} message={:?}",
                failure.status, failure.api_message, failure.message
            );
            let detail = if state.config.logging.sanitize_tokens {
                sanitize(&detail)
            } else {
                detail
            };
            error!("Image conversion error: {}", detail);
        }
        _ => warn!("Rejected conversion request: {}", e),
    }
}

/// Any method other than POST/OPTIONS on the conversion route
pub async fn method_not_allowed_handler() -> AppError {
    let start = Instant::now();
    let e = AppError::MethodNotAllowed;
    warn!("Rejected conversion request: {}", e);
    metrics::record_rejection(&e);
    metrics::record_request(e.status_code().as_u16(), start.elapsed().as_secs_f64());
    e
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.inference.model().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}
