// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use snap2sabre::error::{AppError, UpstreamFailure, UPSTREAM_FALLBACK_MESSAGE};

async fn render(error: AppError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        AppError::MethodNotAllowed,
        AppError::InvalidInput,
        AppError::PayloadTooLarge,
        AppError::Upstream(UpstreamFailure::default()),
        AppError::Config("missing key".to_string()),
        AppError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[tokio::test]
async fn test_validation_error_bodies() {
    assert_eq!(
        render(AppError::MethodNotAllowed).await,
        (StatusCode::METHOD_NOT_ALLOWED, json!({ "error": "Method not allowed" }))
    );
    assert_eq!(
        render(AppError::InvalidInput).await,
        (StatusCode::BAD_REQUEST, json!({ "error": "Invalid or missing imageDataUrl" }))
    );
    assert_eq!(
        render(AppError::PayloadTooLarge).await,
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            json!({ "error": "Image too large. Please use a smaller screenshot." })
        )
    );
}

#[tokio::test]
async fn test_upstream_status_and_message() {
    let failure = UpstreamFailure::new(Some(429), "rate limited");
    assert_eq!(
        render(failure.into()).await,
        (StatusCode::TOO_MANY_REQUESTS, json!({ "error": "rate limited" }))
    );
}

#[tokio::test]
async fn test_upstream_fallbacks() {
    let (status, body) = render(AppError::Upstream(UpstreamFailure::default())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], UPSTREAM_FALLBACK_MESSAGE);
}

#[test]
fn test_upstream_message_precedence() {
    let failure = UpstreamFailure {
        status: Some(400),
        api_message: Some("Invalid image".to_string()),
        message: Some("400 Bad Request".to_string()),
    };
    assert_eq!(failure.describe(), "Invalid image");

    let failure = UpstreamFailure {
        api_message: Some("   ".to_string()),
        ..UpstreamFailure::new(None, "connection reset")
    };
    assert_eq!(failure.describe(), "connection reset");
}

#[test]
fn test_upstream_status_sanitized() {
    assert_eq!(
        UpstreamFailure::new(Some(200), "odd").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        UpstreamFailure::new(Some(42), "bogus").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        UpstreamFailure::new(Some(503), "down").status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        UpstreamFailure::new(None, "no status").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_config_error_is_server_error() {
    let error = AppError::Config("no inference API key".to_string());
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(format!("{}", error).contains("no inference API key"));
}
