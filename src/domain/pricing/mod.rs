//! Pricing Module - Mumbai apartment price estimation.
//!
//! A pure domain service: a typed [`PriceRequest`] goes in, an
//! [`EstimatedPriceCr`] comes out. Lookup tables are exhaustive `match`
//! arms on closed enums, so every zone, floor band and amenity always has
//! exactly one entry.
//!
//! # Components
//!
//! - `LocationZone` - base rate and location multiplier
//! - `FloorBand` - floor preference multiplier
//! - `Amenity` - counted for the amenity uplift
//! - `PriceCalculator` - the estimate itself, plus a factor breakdown

mod amenity;
mod engine;
mod errors;
mod estimate;
mod floor;
mod location;
mod request;

pub use amenity::Amenity;
pub use engine::{age_multiplier, amenities_multiplier, PriceBreakdown, PriceCalculator, AMENITY_UPLIFT};
pub use errors::PricingError;
pub use estimate::{EstimatedPriceCr, CRORE};
pub use floor::FloorBand;
pub use location::LocationZone;
pub use request::{
    PriceRequest, RawPriceRequest, BUILDING_AGE_RANGE, CARPET_AREA_RANGE, CARPET_AREA_STEP,
    DEFAULT_BUILDING_AGE_YEARS, DEFAULT_CARPET_AREA_SQFT,
};
