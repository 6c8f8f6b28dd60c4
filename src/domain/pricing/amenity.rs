//! Building amenities.
//!
//! Only the number of selected amenities affects the price; which ones are
//! picked does not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PricingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Lift,
    Parking,
    Security,
    Gym,
    Garden,
    SwimmingPool,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::Lift,
        Amenity::Parking,
        Amenity::Security,
        Amenity::Gym,
        Amenity::Garden,
        Amenity::SwimmingPool,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Amenity::Lift => "lift",
            Amenity::Parking => "parking",
            Amenity::Security => "security",
            Amenity::Gym => "gym",
            Amenity::Garden => "garden",
            Amenity::SwimmingPool => "swimming_pool",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Amenity::Lift => "Lift",
            Amenity::Parking => "Parking",
            Amenity::Security => "Security",
            Amenity::Gym => "Gym",
            Amenity::Garden => "Garden",
            Amenity::SwimmingPool => "Swimming Pool",
        }
    }
}

impl FromStr for Amenity {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Amenity::ALL
            .into_iter()
            .find(|amenity| {
                needle.eq_ignore_ascii_case(amenity.key())
                    || needle.eq_ignore_ascii_case(amenity.display_name())
            })
            .ok_or_else(|| PricingError::invalid_input("amenity", s))
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
