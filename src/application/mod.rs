//! Application layer - Queries and Handlers.
//!
//! This layer turns raw user selections into domain requests and assembles
//! the views the adapters render.

pub mod handlers;

pub use handlers::{
    EstimateError, EstimatePriceHandler, EstimatePriceQuery, EstimateView,
};
