// Screenshot → Sabre text conversion
// Author: kelexine (https://github.com/kelexine)

use super::normalize::normalize_output;
use super::prompt::SABRE_PROMPT;
use crate::error::{AppError, Result};
use crate::inference::InferenceClient;
use crate::metrics;
use crate::vision::ImageDataUrl;
use std::time::Instant;
use tracing::{debug, info};

/// Run one conversion: prompt + image to the model, then clean the reply.
///
/// Exactly one inference call is made. Failures surface as
/// [`AppError::Upstream`] carrying whatever status/message the backend gave.
pub async fn convert_screenshot(
    client: &dyn InferenceClient,
    image: &ImageDataUrl,
) -> Result<String> {
    let model = client.model().to_string();
    let start = Instant::now();

    let outcome = client.submit(SABRE_PROMPT, image.as_str()).await;
    let elapsed = start.elapsed().as_secs_f64();

    let shape = match outcome {
        Ok(shape) => {
            metrics::record_inference_call(&model, "success", elapsed);
            shape
        }
        Err(failure) => {
            metrics::record_inference_call(&model, "failure", elapsed);
            return Err(AppError::Upstream(failure));
        }
    };

    let raw = shape.into_text();
    debug!("Model returned {} chars", raw.len());

    let sabre_text = normalize_output(&raw);
    info!(
        "Converted {} screenshot with {} in {:.2}s ({} lines)",
        image.media_type(),
        model,
        elapsed,
        sabre_text.lines().count()
    );

    Ok(sabre_text)
}
