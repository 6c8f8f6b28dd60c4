//! HTTP handlers for estimator endpoints.
//!
//! These handlers connect Axum routes to the estimate query handler.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::handlers::{EstimateError, EstimatePriceHandler, EstimatePriceQuery};
use crate::config::BrandingConfig;

use super::dto::{
    ErrorResponse, EstimateRequest, EstimateResponse, FormSelection, HealthResponse,
    OptionsResponse,
};
use super::templates::EstimatorPageTemplate;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Estimator API error that implements IntoResponse.
#[derive(Debug)]
pub enum EstimatorApiError {
    BadRequest(ErrorResponse),
}

impl IntoResponse for EstimatorApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            EstimatorApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
        }
    }
}

impl From<EstimateError> for EstimatorApiError {
    fn from(error: EstimateError) -> Self {
        let message = error.to_string();
        let response = match &error {
            EstimateError::InvalidInput(_) => ErrorResponse::new("INVALID_INPUT", message)
                .with_details(json!({ "field": error.field() })),
            EstimateError::OutOfRange { field, min, max, actual } => {
                ErrorResponse::new("OUT_OF_RANGE", message).with_details(json!({
                    "field": field,
                    "min": min,
                    "max": max,
                    "actual": actual,
                }))
            }
            EstimateError::UnknownClient(_) => ErrorResponse::new("UNKNOWN_CLIENT", message)
                .with_details(json!({ "field": "client" })),
        };
        EstimatorApiError::BadRequest(response)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing estimator dependencies.
#[derive(Clone)]
pub struct EstimatorAppState {
    pub branding: Arc<BrandingConfig>,
}

impl EstimatorAppState {
    pub fn new(branding: BrandingConfig) -> Self {
        Self {
            branding: Arc::new(branding),
        }
    }

    pub fn estimate_handler(&self) -> EstimatePriceHandler {
        EstimatePriceHandler::new(self.branding.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
///
/// Renders the form and the estimate for the submitted (or initial) selections.
pub async fn estimator_page(
    State(state): State<EstimatorAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> EstimatorPageTemplate {
    let (selection, outcome) = match FormSelection::from_pairs(&pairs) {
        Ok(selection) => {
            let outcome = state
                .estimate_handler()
                .handle(EstimatePriceQuery::from(selection.clone()))
                .map_err(|err| err.to_string());
            (selection, outcome)
        }
        Err(err) => {
            tracing::warn!(field = err.field, value = %err.value, "Unparseable form field");
            (
                FormSelection::default(),
                Err(format!("'{}' is not a number for {}", err.value, err.field)),
            )
        }
    };

    EstimatorPageTemplate::new(
        &state.branding,
        &selection,
        outcome.as_ref().map_err(String::as_str),
    )
}

/// POST /api/estimate
pub async fn post_estimate(
    State(state): State<EstimatorAppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, EstimatorApiError> {
    let view = state
        .estimate_handler()
        .handle(EstimatePriceQuery::from(request))?;
    Ok(Json(view))
}

/// GET /api/estimate/options
pub async fn get_options(State(state): State<EstimatorAppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from_branding(&state.branding))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
