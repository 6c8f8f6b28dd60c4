//! Query handlers for the application layer.

pub mod estimate_price;

pub use estimate_price::{
    BrandingView, EstimateError, EstimatePriceHandler, EstimatePriceQuery, EstimateView,
    DISCLAIMER,
};
