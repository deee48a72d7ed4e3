// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    VALIDATION_REJECTIONS,
    INFERENCE_CALLS,
    INFERENCE_DURATION,
};

use crate::error::AppError;

/// Helper to record conversion request metrics
pub fn record_request(status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();
    REQUESTS_TOTAL.with_label_values(&[&status]).inc();
    REQUEST_DURATION
        .with_label_values(&[&status])
        .observe(duration_secs);
}

/// Helper to record inference API call metrics
pub fn record_inference_call(model: &str, outcome: &str, duration_secs: f64) {
    INFERENCE_CALLS.with_label_values(&[model, outcome]).inc();
    INFERENCE_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record a request turned away before the model was called
pub fn record_rejection(error: &AppError) {
    let reason = match error {
        AppError::MethodNotAllowed => "method_not_allowed",
        AppError::InvalidInput => "invalid_input",
        AppError::PayloadTooLarge => "payload_too_large",
        _ => return,
    };
    VALIDATION_REJECTIONS.with_label_values(&[reason]).inc();
}
