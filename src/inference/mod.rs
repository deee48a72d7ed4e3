//! Multimodal inference backend.
//!
//! The conversion handler only needs one thing from the outside world:
//! "here is a prompt and an image, give me text back". That seam is the
//! [`InferenceClient`] trait. [`OpenAiClient`] implements it against the
//! OpenAI Responses API; tests substitute deterministic fakes.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;
pub mod models;

pub use client::OpenAiClient;
pub use models::{ResponseShape, ResponsesBody};

use crate::error::UpstreamFailure;
use async_trait::async_trait;

/// Submits a prompt plus image to a vision model.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Model identifier used for every call.
    fn model(&self) -> &str;

    /// Send one user turn (instruction text + image data URL) and return
    /// the reply in whatever shape the backend produced.
    async fn submit(
        &self,
        prompt: &str,
        image_data_url: &str,
    ) -> std::result::Result<ResponseShape, UpstreamFailure>;
}
