//! Axum-based HTTP server for snap2sabre.
//!
//! Exposes the screenshot conversion endpoint plus health and metrics
//! routes.
//!
//! # Components
//!
//! - `handlers`: Conversion, health and metrics endpoints.
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{ConversionResponse, HealthResponse};
pub use routes::{create_router, AppState};
