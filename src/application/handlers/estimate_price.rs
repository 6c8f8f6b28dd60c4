//! EstimatePriceHandler - Query handler for a single price estimate.
//!
//! Turns the raw selections of a form or JSON client into a typed
//! [`PriceRequest`], enforces the input-control bounds, runs the calculator
//! and assembles what the page displays.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::BrandingConfig;
use crate::domain::pricing::{
    EstimatedPriceCr, PriceBreakdown, PriceCalculator, PriceRequest, PricingError,
    RawPriceRequest, BUILDING_AGE_RANGE, CARPET_AREA_RANGE,
};

/// Caption shown under every estimate.
pub const DISCLAIMER: &str = "⚠️ Indicative valuation based on market heuristics. \
Actual price varies by society, view, demand, and negotiation.";

/// Query to estimate the price of one apartment.
#[derive(Debug, Clone)]
pub struct EstimatePriceQuery {
    pub request: RawPriceRequest,
    /// Client the estimate is prepared for; the configured default when `None`.
    pub client: Option<String>,
    /// Paid clients get the page without product branding.
    pub paid_client: bool,
}

/// Branding decisions for the rendered estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandingView {
    pub client: Option<String>,
    pub show_branding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// Result of a successful estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateView {
    pub request: PriceRequest,
    pub price_cr: EstimatedPriceCr,
    pub display: String,
    pub disclaimer: &'static str,
    pub breakdown: PriceBreakdown,
    pub branding: BrandingView,
}

/// Errors returned while handling an estimate query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error(transparent)]
    InvalidInput(#[from] PricingError),

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },

    #[error("Unknown client '{0}'")]
    UnknownClient(String),
}

impl EstimateError {
    fn check_range(
        field: &'static str,
        range: &RangeInclusive<u32>,
        actual: u32,
    ) -> Result<(), Self> {
        if range.contains(&actual) {
            Ok(())
        } else {
            Err(EstimateError::OutOfRange {
                field,
                min: *range.start(),
                max: *range.end(),
                actual,
            })
        }
    }

    /// Name of the offending field, if the error concerns one.
    pub fn field(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput(err) => err.field(),
            EstimateError::OutOfRange { field, .. } => field,
            EstimateError::UnknownClient(_) => "client",
        }
    }
}

/// Handler for price estimates.
pub struct EstimatePriceHandler {
    branding: Arc<BrandingConfig>,
}

impl EstimatePriceHandler {
    pub fn new(branding: Arc<BrandingConfig>) -> Self {
        Self { branding }
    }

    pub fn handle(&self, query: EstimatePriceQuery) -> Result<EstimateView, EstimateError> {
        let result = self.evaluate(query);
        if let Err(ref err) = result {
            tracing::warn!(field = err.field(), error = %err, "Rejected estimate input");
        }
        result
    }

    fn evaluate(&self, query: EstimatePriceQuery) -> Result<EstimateView, EstimateError> {
        EstimateError::check_range(
            "carpet_area_sqft",
            &CARPET_AREA_RANGE,
            query.request.carpet_area_sqft,
        )?;
        EstimateError::check_range(
            "building_age_years",
            &BUILDING_AGE_RANGE,
            query.request.building_age_years,
        )?;

        let branding = self.branding_view(query.client, query.paid_client)?;
        let request = PriceRequest::try_from(query.request)?;
        let breakdown = PriceCalculator::breakdown(&request);

        tracing::debug!(
            carpet_area_sqft = request.carpet_area_sqft(),
            location_zone = %request.location_zone(),
            floor_band = %request.floor_band(),
            building_age_years = request.building_age_years(),
            amenities = request.amenities().len(),
            price_cr = %breakdown.estimated_price,
            "Computed estimate"
        );

        Ok(EstimateView {
            price_cr: breakdown.estimated_price,
            display: breakdown.estimated_price.format_inr(),
            disclaimer: DISCLAIMER,
            breakdown,
            request,
            branding,
        })
    }

    fn branding_view(
        &self,
        client: Option<String>,
        paid_client: bool,
    ) -> Result<BrandingView, EstimateError> {
        let client = match client {
            Some(name) if self.branding.is_known_client(&name) => Some(name),
            Some(name) => return Err(EstimateError::UnknownClient(name)),
            None => self.branding.default_client(),
        };
        let show_branding = !paid_client;

        Ok(BrandingView {
            client,
            show_branding,
            footer: show_branding.then(|| self.branding.footer.clone()),
        })
    }
}
