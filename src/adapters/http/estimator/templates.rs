//! HTML template for the estimator page.
//!
//! The form submits with GET and the page is re-rendered with the estimate
//! for the submitted selections. Markup lives in `templates/estimator.html`.

use askama::Template;

use crate::config::BrandingConfig;
use crate::domain::pricing::{
    Amenity, FloorBand, LocationZone, BUILDING_AGE_RANGE, CARPET_AREA_RANGE, CARPET_AREA_STEP,
};

use super::dto::{EstimateResponse, FormSelection};

/// Notice shown instead of a price when the selections cannot be evaluated.
pub const FAILURE_NOTICE: &str = "We could not estimate a price for these selections.";

/// An `<option>` or checkbox in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FormOption {
    fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// A range slider and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeControl {
    pub value: u32,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

/// The result card for a successful estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateCard {
    pub display: String,
    pub disclaimer: &'static str,
    pub prepared_for: Option<String>,
}

#[derive(Template)]
#[template(path = "estimator.html")]
pub struct EstimatorPageTemplate {
    pub product_name: String,
    pub clients: Vec<FormOption>,
    pub paid_client: bool,
    pub carpet_area: RangeControl,
    pub building_age: RangeControl,
    pub zones: Vec<FormOption>,
    pub floors: Vec<FormOption>,
    pub amenities: Vec<FormOption>,
    pub estimate: Option<EstimateCard>,
    pub failure: Option<String>,
    pub failure_notice: &'static str,
    /// Footer branding, shown to unpaid clients whether or not the estimate succeeded.
    pub footer: Option<String>,
}

impl EstimatorPageTemplate {
    pub fn new(
        branding: &BrandingConfig,
        selection: &FormSelection,
        outcome: Result<&EstimateResponse, &str>,
    ) -> Self {
        let current_client = selection.client.clone().or_else(|| branding.default_client());
        let clients = branding
            .clients_list()
            .into_iter()
            .map(|client| {
                let selected = current_client.as_deref() == Some(client.as_str());
                FormOption::new(client.clone(), client, selected)
            })
            .collect();

        let zone = selection.location_zone.parse::<LocationZone>().ok();
        let floor = selection.floor_band.parse::<FloorBand>().ok();

        let (estimate, failure) = match outcome {
            Ok(view) => {
                let prepared_for = view
                    .branding
                    .client
                    .clone()
                    .filter(|_| view.branding.show_branding);
                let card = EstimateCard {
                    display: view.display.clone(),
                    disclaimer: view.disclaimer,
                    prepared_for,
                };
                (Some(card), None)
            }
            Err(reason) => (None, Some(reason.to_string())),
        };

        Self {
            product_name: branding.product_name.clone(),
            clients,
            paid_client: selection.paid_client,
            carpet_area: RangeControl {
                value: selection.carpet_area_sqft,
                min: *CARPET_AREA_RANGE.start(),
                max: *CARPET_AREA_RANGE.end(),
                step: CARPET_AREA_STEP,
            },
            building_age: RangeControl {
                value: selection.building_age_years,
                min: *BUILDING_AGE_RANGE.start(),
                max: *BUILDING_AGE_RANGE.end(),
                step: 1,
            },
            zones: LocationZone::ALL
                .iter()
                .map(|z| FormOption::new(z.key(), z.display_name(), zone == Some(*z)))
                .collect(),
            floors: FloorBand::ALL
                .iter()
                .map(|f| FormOption::new(f.key(), f.display_name(), floor == Some(*f)))
                .collect(),
            amenities: Amenity::ALL
                .iter()
                .map(|a| FormOption::new(a.key(), a.display_name(), selection.has_amenity(*a)))
                .collect(),
            estimate,
            failure,
            failure_notice: FAILURE_NOTICE,
            footer: (!selection.paid_client).then(|| branding.footer.clone()),
        }
    }
}
