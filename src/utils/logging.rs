//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to prevent
//! sensitive data (like inference API keys) from leaking into logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Sanitizes sensitive information from log messages.
///
/// Replaces OpenAI-style secret keys (`sk-...`) and the token following a
/// `Bearer ` prefix with a `\[REDACTED\]` placeholder. Upstream error bodies
/// sometimes echo a partial key back, so they go through here before logging.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Pattern 1: OpenAI secret keys, including project keys (sk-proj-...)
    redact_after(&mut result, "sk-", "[REDACTED_API_KEY]", 0);

    // Pattern 2: Authorization header values
    redact_after(&mut result, "Bearer ", "[REDACTED_TOKEN]", "Bearer ".len());

    result
}

/// Replace every token starting with `marker` (keeping the first `keep`
/// bytes of the marker) up to the next delimiter. The marker only counts at
/// a word boundary, so `task-1` is left alone.
fn redact_after(result: &mut String, marker: &str, replacement: &str, keep: usize) {
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find(marker) {
        let marker_at = search_from + offset;
        let start = marker_at + keep;
        search_from = marker_at + marker.len();

        let at_boundary = result[..marker_at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',')
            .map(|i| start + i)
            .unwrap_or(result.len());

        if !at_boundary || start == end || result[start..end].starts_with('[') {
            continue;
        }

        result.replace_range(start..end, replacement);
        search_from = start + replacement.len();
    }
}
