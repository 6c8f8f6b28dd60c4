//! Location zones and their pricing tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PricingError;

/// Broad Mumbai zone a property sits in.
///
/// Drives both the base rate per square foot and the location multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationZone {
    SouthMumbai,
    WesternSuburbs,
    CentralSuburbs,
}

impl LocationZone {
    /// All zones, in the order the form lists them.
    pub const ALL: [LocationZone; 3] = [
        LocationZone::SouthMumbai,
        LocationZone::WesternSuburbs,
        LocationZone::CentralSuburbs,
    ];

    /// Stable machine key used in form values and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            LocationZone::SouthMumbai => "south_mumbai",
            LocationZone::WesternSuburbs => "western_suburbs",
            LocationZone::CentralSuburbs => "central_suburbs",
        }
    }

    /// Returns the display name for this zone.
    pub fn display_name(&self) -> &'static str {
        match self {
            LocationZone::SouthMumbai => "South Mumbai",
            LocationZone::WesternSuburbs => "Western Suburbs",
            LocationZone::CentralSuburbs => "Central Suburbs",
        }
    }

    /// Market rate in rupees per square foot of carpet area.
    pub fn rate_per_sqft(&self) -> f64 {
        match self {
            LocationZone::SouthMumbai => 60_000.0,
            LocationZone::WesternSuburbs => 40_000.0,
            LocationZone::CentralSuburbs => 22_000.0,
        }
    }

    /// Location desirability multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            LocationZone::SouthMumbai => 1.75,
            LocationZone::WesternSuburbs => 1.20,
            LocationZone::CentralSuburbs => 1.10,
        }
    }
}

impl FromStr for LocationZone {
    type Err = PricingError;

    /// Accepts either the machine key or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LocationZone::ALL
            .into_iter()
            .find(|zone| {
                needle.eq_ignore_ascii_case(zone.key())
                    || needle.eq_ignore_ascii_case(zone.display_name())
            })
            .ok_or_else(|| PricingError::invalid_input("location zone", s))
    }
}

impl fmt::Display for LocationZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
