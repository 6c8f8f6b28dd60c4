//! Estimated price value object, denominated in crores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rupees per crore.
pub const CRORE: f64 = 10_000_000.0;

/// A price in crores, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimatedPriceCr(f64);

impl EstimatedPriceCr {
    /// Converts a rupee amount to crores, rounded to two decimal places.
    ///
    /// Rounding is applied to the exact binary value of the crore amount, so
    /// `5.145` (stored as `5.14499…`) becomes `5.14`.
    pub fn from_rupees(rupees: f64) -> Self {
        Self(round_to_cents(rupees / CRORE))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Formats the price the way the estimate card shows it, e.g. `₹ 5.78 Cr`.
    pub fn format_inr(&self) -> String {
        format!("₹ {} Cr", self)
    }
}

impl fmt::Display for EstimatedPriceCr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn round_to_cents(value: f64) -> f64 {
    // `{:.2}` rounds the exact value; scaling by 100 first would round twice.
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(EstimatedPriceCr::from_rupees(57_834_000.0).value(), 5.78);
        assert_eq!(EstimatedPriceCr::from_rupees(7_114_800.0).value(), 0.71);
        assert_eq!(EstimatedPriceCr::from_rupees(79_672_320.0).value(), 7.97);
    }

    #[test]
    fn rounds_the_stored_value_not_the_scaled_one() {
        // 5.145 and 19.845 are stored just below the halfway point.
        assert_eq!(EstimatedPriceCr::from_rupees(51_450_000.0).value(), 5.14);
        assert_eq!(EstimatedPriceCr::from_rupees(198_450_000.0).value(), 19.84);
    }

    #[test]
    fn display_always_shows_two_decimals() {
        assert_eq!(EstimatedPriceCr::from_rupees(7_000_000.0).to_string(), "0.70");
        assert_eq!(EstimatedPriceCr::from_rupees(20_000_000.0).to_string(), "2.00");
    }

    #[test]
    fn format_inr_adds_prefix_and_unit() {
        let price = EstimatedPriceCr::from_rupees(57_834_000.0);
        assert_eq!(price.format_inr(), "₹ 5.78 Cr");
    }

    #[test]
    fn serializes_as_plain_number() {
        let price = EstimatedPriceCr::from_rupees(57_834_000.0);
        assert_eq!(serde_json::to_string(&price).unwrap(), "5.78");
    }
}
