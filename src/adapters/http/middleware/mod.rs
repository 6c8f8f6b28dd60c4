//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `cors` - CORS policy built from the configured origin list

pub mod cors;

pub use cors::cors_layer;
