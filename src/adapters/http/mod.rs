//! HTTP adapters - REST API and page implementations.

pub mod estimator;
pub mod middleware;

// Re-export key types for convenience
pub use estimator::estimator_routes;
pub use estimator::EstimatorAppState;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router with tracing, timeout and CORS layers.
pub fn app_router(state: EstimatorAppState, server: &ServerConfig) -> Router {
    estimator_routes(state)
        .layer(middleware::cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}
