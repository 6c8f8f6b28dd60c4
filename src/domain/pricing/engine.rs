//! Price Calculator - Mumbai market heuristics.
//!
//! `final = area * rate * location * floor * amenities * age`, evaluated in
//! that order in `f64`, then converted to crores and rounded to two places.

use serde::Serialize;

use super::{EstimatedPriceCr, PriceRequest};

/// Uplift per selected amenity (2%).
pub const AMENITY_UPLIFT: f64 = 0.02;

/// Every factor that went into an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub rate_per_sqft: f64,
    pub base_price: f64,
    pub location_multiplier: f64,
    pub floor_multiplier: f64,
    pub amenities_multiplier: f64,
    pub age_multiplier: f64,
    /// Unrounded price in rupees.
    pub final_price: f64,
    pub estimated_price: EstimatedPriceCr,
}

/// Depreciation step for the building's age.
///
/// Each band includes its upper threshold: 5, 15 and 30 years.
pub fn age_multiplier(building_age_years: u32) -> f64 {
    match building_age_years {
        0..=5 => 1.00,
        6..=15 => 0.85,
        16..=30 => 0.75,
        _ => 0.65,
    }
}

pub fn amenities_multiplier(amenity_count: usize) -> f64 {
    1.0 + AMENITY_UPLIFT * amenity_count as f64
}

/// Stateless price calculator.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Computes the rounded estimate in crores.
    pub fn estimate(request: &PriceRequest) -> EstimatedPriceCr {
        Self::breakdown(request).estimated_price
    }

    /// Computes the estimate along with each intermediate factor.
    pub fn breakdown(request: &PriceRequest) -> PriceBreakdown {
        let zone = request.location_zone();
        let rate_per_sqft = zone.rate_per_sqft();
        let base_price = f64::from(request.carpet_area_sqft()) * rate_per_sqft;

        let location_multiplier = zone.multiplier();
        let floor_multiplier = request.floor_band().multiplier();
        let amenities_multiplier = amenities_multiplier(request.amenities().len());
        let age_multiplier = age_multiplier(request.building_age_years());

        let final_price = base_price
            * location_multiplier
            * floor_multiplier
            * amenities_multiplier
            * age_multiplier;

        PriceBreakdown {
            rate_per_sqft,
            base_price,
            location_multiplier,
            floor_multiplier,
            amenities_multiplier,
            age_multiplier,
            final_price,
            estimated_price: EstimatedPriceCr::from_rupees(final_price),
        }
    }
}
