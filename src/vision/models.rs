// Vision input models and validation
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AppError, Result};
use serde_json::Value;

/// Prefix every accepted image payload must start with.
pub const IMAGE_DATA_URL_PREFIX: &str = "data:image/";

/// Upper bound on data URL length, in characters. Keeps the payload under
/// the hosting platform's request size ceiling.
pub const MAX_DATA_URL_CHARS: usize = 4_000_000;

/// A screenshot submitted as a `data:image/...;base64,...` URL.
///
/// Only the shape and size are checked; the image bytes are passed through
/// to the inference API untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUrl(String);

impl ImageDataUrl {
    /// Validate a raw data URL.
    ///
    /// Checks run in order: image prefix first (`InvalidInput`), then
    /// length (`PayloadTooLarge`).
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();

        if !raw.starts_with(IMAGE_DATA_URL_PREFIX) {
            return Err(AppError::InvalidInput);
        }

        validate_data_url_size(&raw)?;

        Ok(Self(raw))
    }

    /// Pull `imageDataUrl` out of a decoded JSON request body.
    ///
    /// Anything other than an object holding a string field is treated as
    /// a missing field.
    pub fn from_request_body(body: &Value) -> Result<Self> {
        let raw = body
            .get("imageDataUrl")
            .and_then(Value::as_str)
            .ok_or(AppError::InvalidInput)?;

        Self::parse(raw)
    }

    /// Declared media type, e.g. `image/png`. Informational only.
    pub fn media_type(&self) -> &str {
        let rest = &self.0["data:".len()..];
        let end = rest.find([';', ',']).unwrap_or(rest.len());
        &rest[..end]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for ImageDataUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reject data URLs longer than [`MAX_DATA_URL_CHARS`].
pub fn validate_data_url_size(raw: &str) -> Result<()> {
    // Byte length is an upper bound on char count; only count when it matters
    if raw.len() > MAX_DATA_URL_CHARS && raw.chars().count() > MAX_DATA_URL_CHARS {
        return Err(AppError::PayloadTooLarge);
    }
    Ok(())
}
