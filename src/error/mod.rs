// Error types for snap2sabre
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Message returned when an upstream failure carries no usable text.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Image conversion failed";

/// Failure reported by the inference backend.
///
/// Mirrors what can be recovered from a failed call: an optional HTTP
/// status, the nested `error.message` from the API's JSON body, and a
/// generic description of what went wrong (transport error, bad body...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamFailure {
    pub status: Option<u16>,
    pub api_message: Option<String>,
    pub message: Option<String>,
}

impl UpstreamFailure {
    /// Failure with a status and a plain message.
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            api_message: None,
            message: Some(message.into()),
        }
    }

    /// Human-readable message: nested API message, then generic, then fallback.
    pub fn describe(&self) -> &str {
        [&self.api_message, &self.message]
            .into_iter()
            .flatten()
            .map(|m| m.trim())
            .find(|m| !m.is_empty())
            .unwrap_or(UPSTREAM_FALLBACK_MESSAGE)
    }

    /// Status to surface to the caller. Anything outside 4xx/5xx becomes 500.
    pub fn status_code(&self) -> StatusCode {
        self.status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for UpstreamFailure {}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid or missing imageDataUrl")]
    InvalidInput,

    #[error("Image too large. Please use a smaller screenshot.")]
    PayloadTooLarge,

    #[error("{0}")]
    Upstream(UpstreamFailure),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UpstreamFailure> for AppError {
    fn from(failure: UpstreamFailure) -> Self {
        AppError::Upstream(failure)
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream(failure) => failure.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert AppError to the endpoint's `{ "error": ... }` body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
