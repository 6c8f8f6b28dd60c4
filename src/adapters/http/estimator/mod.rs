//! Estimator HTTP adapter module.
//!
//! Serves the estimator form and a JSON API:
//! - `GET /` - HTML form, evaluated for the submitted selections
//! - `POST /api/estimate` - Estimate from a JSON body
//! - `GET /api/estimate/options` - Selection lists and slider bounds
//! - `GET /health` - Liveness check

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use dto::ErrorResponse;
pub use handlers::EstimatorAppState;
pub use routes::estimator_routes;
