//! Pricing-specific error types.
//!
//! The pricing tables are exhaustive over their enums, so the only way to
//! hand the engine an unmapped value is as text at the boundary. Parsing
//! rejects such values here instead of defaulting them.

use thiserror::Error;

/// Errors raised while building a price request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A categorical field carried a value outside its declared domain.
    #[error("Invalid {field}: '{value}' is not a recognised value")]
    InvalidInput { field: &'static str, value: String },
}

impl PricingError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_field_and_value() {
        let err = PricingError::invalid_input("location zone", "Navi Mumbai");
        assert_eq!(
            err.to_string(),
            "Invalid location zone: 'Navi Mumbai' is not a recognised value"
        );
        assert_eq!(err.field(), "location zone");
    }
}
