//! Sabre GDS air-segment conversion.
//!
//! The heavy lifting (reading the screenshot, laying out segment lines) is
//! done by the vision model. This module owns what we control around it:
//!
//! - `prompt`: the fixed instruction set describing the Sabre line format.
//! - `normalize`: deterministic cleanup of the model's reply.
//! - `convert`: one prompt + image round trip through an
//!   [`InferenceClient`](crate::inference::InferenceClient).
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod convert;
pub mod normalize;
pub mod prompt;

pub use convert::convert_screenshot;
pub use normalize::normalize_output;
pub use prompt::SABRE_PROMPT;
