//! Axum-based HTTP server exposing the chart and weekday operations.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::AppError;
pub use router::create_router;
