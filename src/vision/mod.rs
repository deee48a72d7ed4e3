//! Screenshot input handling.
//!
//! Validates the `imageDataUrl` carried by a conversion request. The image
//! itself is never decoded: shape and size are checked and the data URL is
//! forwarded verbatim to the inference API.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;

pub use models::{ImageDataUrl, IMAGE_DATA_URL_PREFIX, MAX_DATA_URL_CHARS};
