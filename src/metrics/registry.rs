// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Conversion requests by response status
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("conversion_requests_total", "Total number of conversion requests"),
        &["status_code"],
        REGISTRY
    ).unwrap();

    /// End-to-end conversion request duration
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("conversion_request_duration_seconds", "Conversion request duration in seconds")
            .buckets(vec![0.005, 0.05, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["status_code"],
        REGISTRY
    ).unwrap();

    /// Requests rejected before reaching the model
    pub static ref VALIDATION_REJECTIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("validation_rejections_total", "Requests rejected by input validation"),
        &["reason"], // reason: method_not_allowed, invalid_input, payload_too_large
        REGISTRY
    ).unwrap();

    // ============================================================================
    // INFERENCE API METRICS
    // ============================================================================

    /// Upstream inference calls
    pub static ref INFERENCE_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("inference_calls_total", "Total inference API calls"),
        &["model", "outcome"], // outcome: success, failure
        REGISTRY
    ).unwrap();

    /// Upstream inference call duration
    pub static ref INFERENCE_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("inference_call_duration_seconds", "Inference API call duration")
            .buckets(vec![0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0, 120.0]),
        &["model"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
