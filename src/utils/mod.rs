//! Utility functions and helpers for snap2sabre.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret redaction for log lines.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
