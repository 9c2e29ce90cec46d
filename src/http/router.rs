//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing). The
//! computation core is stateless, so the router carries no shared state.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Create the main application router with all routes and middleware.
pub fn create_router() -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/chart", get(handlers::calc_chart_get))
        .route("/chart", post(handlers::calc_chart_post))
        .route("/weekday", get(handlers::weekday_get))
        .route("/weekday", post(handlers::weekday_post));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
