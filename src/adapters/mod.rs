//! Adapters - Implementations of the outer surfaces.
//!
//! - `http` - axum routes serving the estimator page and JSON API

pub mod http;
