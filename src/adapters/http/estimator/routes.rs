//! HTTP routes for estimator endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{estimator_page, get_options, health, post_estimate, EstimatorAppState};

/// Creates the estimator router with all routes.
pub fn estimator_routes(state: EstimatorAppState) -> Router {
    Router::new()
        // GET / - HTML form with the current estimate
        .route("/", get(estimator_page))
        // POST /api/estimate
        .route("/api/estimate", post(post_estimate))
        // GET /api/estimate/options
        .route("/api/estimate/options", get(get_options))
        .route("/health", get(health))
        .with_state(state)
}
