//! HTTP DTOs for estimator endpoints.

pub use crate::application::handlers::{BrandingView, EstimateView as EstimateResponse};

use serde::{Deserialize, Serialize};

use crate::application::handlers::EstimatePriceQuery;
use crate::config::BrandingConfig;
use crate::domain::pricing::{
    Amenity, FloorBand, LocationZone, RawPriceRequest, BUILDING_AGE_RANGE, CARPET_AREA_RANGE,
    CARPET_AREA_STEP, DEFAULT_BUILDING_AGE_YEARS, DEFAULT_CARPET_AREA_SQFT,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/estimate`.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub carpet_area_sqft: u32,
    pub location_zone: String,
    pub floor_band: String,
    pub building_age_years: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub paid_client: bool,
}

impl From<EstimateRequest> for EstimatePriceQuery {
    fn from(req: EstimateRequest) -> Self {
        EstimatePriceQuery {
            request: RawPriceRequest {
                carpet_area_sqft: req.carpet_area_sqft,
                location_zone: req.location_zone,
                floor_band: req.floor_band,
                building_age_years: req.building_age_years,
                amenities: req.amenities,
            },
            client: req.client,
            paid_client: req.paid_client,
        }
    }
}

/// A numeric form field that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldError {
    pub field: &'static str,
    pub value: String,
}

/// Selections submitted through the HTML form's query string.
///
/// Missing fields fall back to the form's initial state. Amenities arrive as
/// a repeated `amenity` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSelection {
    pub carpet_area_sqft: u32,
    pub location_zone: String,
    pub floor_band: String,
    pub building_age_years: u32,
    pub amenities: Vec<String>,
    pub client: Option<String>,
    pub paid_client: bool,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self {
            carpet_area_sqft: DEFAULT_CARPET_AREA_SQFT,
            location_zone: LocationZone::SouthMumbai.key().to_string(),
            floor_band: FloorBand::Low.key().to_string(),
            building_age_years: DEFAULT_BUILDING_AGE_YEARS,
            amenities: Vec::new(),
            client: None,
            paid_client: false,
        }
    }
}

impl FormSelection {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, FormFieldError> {
        let mut selection = FormSelection::default();

        for (key, value) in pairs {
            match key.as_str() {
                "carpet_area_sqft" => {
                    selection.carpet_area_sqft = parse_number("carpet_area_sqft", value)?
                }
                "building_age_years" => {
                    selection.building_age_years = parse_number("building_age_years", value)?
                }
                "location_zone" => selection.location_zone = value.clone(),
                "floor_band" => selection.floor_band = value.clone(),
                "amenity" => selection.amenities.push(value.clone()),
                "client" if !value.is_empty() => selection.client = Some(value.clone()),
                "paid_client" => {
                    selection.paid_client = matches!(value.as_str(), "on" | "true" | "1")
                }
                _ => {}
            }
        }

        Ok(selection)
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities
            .iter()
            .any(|a| a.parse::<Amenity>().map_or(false, |parsed| parsed == amenity))
    }
}

impl From<FormSelection> for EstimatePriceQuery {
    fn from(selection: FormSelection) -> Self {
        EstimatePriceQuery {
            request: RawPriceRequest {
                carpet_area_sqft: selection.carpet_area_sqft,
                location_zone: selection.location_zone,
                floor_band: selection.floor_band,
                building_age_years: selection.building_age_years,
                amenities: selection.amenities,
            },
            client: selection.client,
            paid_client: selection.paid_client,
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, FormFieldError> {
    value.trim().parse().map_err(|_| FormFieldError {
        field,
        value: value.to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Bounds of a slider control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeOption {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

/// Everything a client needs to build the estimator form.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub carpet_area_sqft: RangeOption,
    pub building_age_years: RangeOption,
    pub location_zones: Vec<ChoiceOption>,
    pub floor_bands: Vec<ChoiceOption>,
    pub amenities: Vec<ChoiceOption>,
    pub clients: Vec<String>,
    pub default_client: Option<String>,
}

impl OptionsResponse {
    pub fn from_branding(branding: &BrandingConfig) -> Self {
        Self {
            carpet_area_sqft: RangeOption {
                min: *CARPET_AREA_RANGE.start(),
                max: *CARPET_AREA_RANGE.end(),
                step: CARPET_AREA_STEP,
                default: DEFAULT_CARPET_AREA_SQFT,
            },
            building_age_years: RangeOption {
                min: *BUILDING_AGE_RANGE.start(),
                max: *BUILDING_AGE_RANGE.end(),
                step: 1,
                default: DEFAULT_BUILDING_AGE_YEARS,
            },
            location_zones: LocationZone::ALL
                .iter()
                .map(|z| ChoiceOption { key: z.key(), label: z.display_name() })
                .collect(),
            floor_bands: FloorBand::ALL
                .iter()
                .map(|f| ChoiceOption { key: f.key(), label: f.display_name() })
                .collect(),
            amenities: Amenity::ALL
                .iter()
                .map(|a| ChoiceOption { key: a.key(), label: a.display_name() })
                .collect(),
            clients: branding.clients_list(),
            default_client: branding.default_client(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_yields_initial_form_state() {
        let selection = FormSelection::from_pairs(&[]).unwrap();
        assert_eq!(selection, FormSelection::default());
        assert_eq!(selection.carpet_area_sqft, 600);
        assert_eq!(selection.building_age_years, 10);
    }

    #[test]
    fn collects_repeated_amenities() {
        let selection = FormSelection::from_pairs(&pairs(&[
            ("carpet_area_sqft", "850"),
            ("amenity", "lift"),
            ("amenity", "swimming_pool"),
            ("paid_client", "on"),
        ]))
        .unwrap();

        assert_eq!(selection.carpet_area_sqft, 850);
        assert_eq!(selection.amenities, vec!["lift", "swimming_pool"]);
        assert!(selection.has_amenity(Amenity::SwimmingPool));
        assert!(!selection.has_amenity(Amenity::Gym));
        assert!(selection.paid_client);
    }

    #[test]
    fn blank_client_means_default() {
        let selection = FormSelection::from_pairs(&pairs(&[("client", "")])).unwrap();
        assert_eq!(selection.client, None);
    }

    #[test]
    fn non_numeric_area_is_reported() {
        let err = FormSelection::from_pairs(&pairs(&[("carpet_area_sqft", "big")])).unwrap_err();
        assert_eq!(
            err,
            FormFieldError {
                field: "carpet_area_sqft",
                value: "big".to_string()
            }
        );
    }

    #[test]
    fn estimate_request_deserializes_with_defaults() {
        let req: EstimateRequest = serde_json::from_value(json!({
            "carpet_area_sqft": 600,
            "location_zone": "south_mumbai",
            "floor_band": "mid",
            "building_age_years": 10
        }))
        .unwrap();

        assert!(req.amenities.is_empty());
        assert!(req.client.is_none());
        assert!(!req.paid_client);
    }

    #[test]
    fn options_list_every_choice() {
        let options = OptionsResponse::from_branding(&BrandingConfig::default());
        assert_eq!(options.location_zones.len(), 3);
        assert_eq!(options.floor_bands.len(), 3);
        assert_eq!(options.amenities.len(), 6);
        assert_eq!(options.carpet_area_sqft.step, 50);
        assert_eq!(options.building_age_years.max, 40);
        assert_eq!(options.clients.len(), 4);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("INVALID_INPUT", "bad")).unwrap();
        assert_eq!(json, json!({ "code": "INVALID_INPUT", "message": "bad" }));
    }
}
