//! Floor bands and the floor preference multiplier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PricingError;

/// Which part of the building the unit is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorBand {
    /// Floors 1 to 3.
    Low,
    /// Floors 4 to 10.
    Mid,
    /// Above the 10th floor.
    High,
}

impl FloorBand {
    pub const ALL: [FloorBand; 3] = [FloorBand::Low, FloorBand::Mid, FloorBand::High];

    pub fn key(&self) -> &'static str {
        match self {
            FloorBand::Low => "low",
            FloorBand::Mid => "mid",
            FloorBand::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FloorBand::Low => "Low Floor (1–3)",
            FloorBand::Mid => "Mid Floor (4–10)",
            FloorBand::High => "High Floor (10+)",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            FloorBand::Low => 0.98,
            FloorBand::Mid => 1.08,
            FloorBand::High => 1.14,
        }
    }
}

impl FromStr for FloorBand {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FloorBand::ALL
            .into_iter()
            .find(|band| {
                needle.eq_ignore_ascii_case(band.key())
                    || needle.eq_ignore_ascii_case(band.display_name())
            })
            .ok_or_else(|| PricingError::invalid_input("floor band", s))
    }
}

impl fmt::Display for FloorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_floor_table() {
        assert_eq!(FloorBand::Low.multiplier(), 0.98);
        assert_eq!(FloorBand::Mid.multiplier(), 1.08);
        assert_eq!(FloorBand::High.multiplier(), 1.14);
    }

    #[test]
    fn parses_form_labels() {
        assert_eq!("Mid Floor (4–10)".parse::<FloorBand>().unwrap(), FloorBand::Mid);
        assert_eq!("HIGH".parse::<FloorBand>().unwrap(), FloorBand::High);
    }

    #[test]
    fn rejects_unknown_band() {
        let err = "basement".parse::<FloorBand>().unwrap_err();
        assert_eq!(err.field(), "floor band");
    }
}
