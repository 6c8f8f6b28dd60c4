//! Price request value objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::{Amenity, FloorBand, LocationZone, PricingError};

/// Carpet area accepted by the input controls, in square feet.
pub const CARPET_AREA_RANGE: RangeInclusive<u32> = 300..=2000;

/// Slider increment for carpet area.
pub const CARPET_AREA_STEP: u32 = 50;

pub const DEFAULT_CARPET_AREA_SQFT: u32 = 600;

/// Building age accepted by the input controls, in years.
pub const BUILDING_AGE_RANGE: RangeInclusive<u32> = 0..=40;

pub const DEFAULT_BUILDING_AGE_YEARS: u32 = 10;

/// Typed input to the pricing engine.
///
/// Built fresh for every evaluation. Amenities live in an ordered set so a
/// request can never count the same amenity twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRequest {
    carpet_area_sqft: u32,
    location_zone: LocationZone,
    floor_band: FloorBand,
    building_age_years: u32,
    amenities: BTreeSet<Amenity>,
}

impl PriceRequest {
    pub fn new(
        carpet_area_sqft: u32,
        location_zone: LocationZone,
        floor_band: FloorBand,
        building_age_years: u32,
        amenities: impl IntoIterator<Item = Amenity>,
    ) -> Self {
        Self {
            carpet_area_sqft,
            location_zone,
            floor_band,
            building_age_years,
            amenities: amenities.into_iter().collect(),
        }
    }

    pub fn carpet_area_sqft(&self) -> u32 {
        self.carpet_area_sqft
    }

    pub fn location_zone(&self) -> LocationZone {
        self.location_zone
    }

    pub fn floor_band(&self) -> FloorBand {
        self.floor_band
    }

    pub fn building_age_years(&self) -> u32 {
        self.building_age_years
    }

    pub fn amenities(&self) -> &BTreeSet<Amenity> {
        &self.amenities
    }

    /// Returns a copy of this request with a different carpet area.
    pub fn with_carpet_area(mut self, carpet_area_sqft: u32) -> Self {
        self.carpet_area_sqft = carpet_area_sqft;
        self
    }

    /// Returns a copy of this request with a different building age.
    pub fn with_building_age(mut self, building_age_years: u32) -> Self {
        self.building_age_years = building_age_years;
        self
    }
}

impl Default for PriceRequest {
    /// The form's initial selection.
    fn default() -> Self {
        Self::new(
            DEFAULT_CARPET_AREA_SQFT,
            LocationZone::SouthMumbai,
            FloorBand::Low,
            DEFAULT_BUILDING_AGE_YEARS,
            [],
        )
    }
}

/// Untyped request as it arrives from a form or JSON client.
///
/// Categorical fields are free text; converting into [`PriceRequest`]
/// rejects anything outside the enum domains.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPriceRequest {
    pub carpet_area_sqft: u32,
    pub location_zone: String,
    pub floor_band: String,
    pub building_age_years: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl TryFrom<RawPriceRequest> for PriceRequest {
    type Error = PricingError;

    fn try_from(raw: RawPriceRequest) -> Result<Self, Self::Error> {
        let amenities = raw
            .amenities
            .iter()
            .map(|a| a.parse::<Amenity>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(PriceRequest {
            carpet_area_sqft: raw.carpet_area_sqft,
            location_zone: raw.location_zone.parse()?,
            floor_band: raw.floor_band.parse()?,
            building_age_years: raw.building_age_years,
            amenities,
        })
    }
}
