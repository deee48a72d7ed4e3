// OpenAI Responses API client
// Author: kelexine (https://github.com/kelexine)

use super::models::{ApiErrorBody, ResponseShape, ResponsesBody, ResponsesRequest};
use super::InferenceClient;
use crate::config::InferenceConfig;
use crate::error::{AppError, Result, UpstreamFailure};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the OpenAI Responses API.
///
/// Holds a pooled HTTP client and the credential read at startup. No retries:
/// every failure is returned to the caller as an [`UpstreamFailure`].
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    sanitize_logs: bool,
}

impl OpenAiClient {
    /// Build a client from configuration.
    ///
    /// `config.api_key` must already be resolved (see
    /// [`crate::config::AppConfig::resolve_api_key`]).
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Config("inference API key is not set".to_string()))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created inference HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            api_key,
            endpoint: format!("{}/responses", config.api_base_url.trim_end_matches('/')),
            model: config.model.clone(),
            sanitize_logs: true,
        })
    }

    /// Toggle redaction of secrets in logged upstream error bodies
    pub fn with_log_sanitizing(mut self, enabled: bool) -> Self {
        self.sanitize_logs = enabled;
        self
    }

    /// Full URL of the responses endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extract `error.message` (or `error.type`) from an API error body
    fn extract_error_message(response_text: &str) -> Option<String> {
        let body: ApiErrorBody = serde_json::from_str(response_text).ok()?;
        let detail = body.error?;
        detail.message.or(detail.error_type)
    }
}

#[async_trait]
impl InferenceClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn submit(
        &self,
        prompt: &str,
        image_data_url: &str,
    ) -> std::result::Result<ResponseShape, UpstreamFailure> {
        let request = ResponsesRequest::vision(&self.model, prompt, image_data_url);

        debug!(
            "Calling responses API: model={}, image_chars={}",
            self.model,
            image_data_url.len()
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let status = e.status().map(|s| s.as_u16());
                // The upstream URL stays out of the client-facing message
                UpstreamFailure::new(
                    status,
                    format!("Inference request failed: {}", e.without_url()),
                )
            })?;

        let status = response.status();
        let response_text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let logged_body = if self.sanitize_logs {
                sanitize(&response_text)
            } else {
                response_text.clone()
            };
            error!(
                "Inference API error: HTTP {} - Response body: {}",
                status, logged_body
            );
            return Err(UpstreamFailure {
                status: Some(status.as_u16()),
                api_message: Self::extract_error_message(&response_text),
                message: Some(format!("Inference API returned HTTP {}", status.as_u16())),
            });
        }

        let body: ResponsesBody = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse inference response: {}", e);
            UpstreamFailure::new(None, format!("Response parsing error: {}", e))
        })?;

        debug!("Received inference response");
        Ok(body.into())
    }
}
