//! Branding configuration for the estimator page.
//!
//! Unpaid clients see the product footer and a "prepared for" line; paid
//! clients get a white-label page.

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    /// Page title and heading
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Footer text shown to unpaid clients
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Client names offered in the selector (comma-separated)
    #[serde(default = "default_clients")]
    pub clients: String,

    /// Preselected client; the first listed client when unset
    pub default_client: Option<String>,
}

impl BrandingConfig {
    /// Get client names as a vector
    pub fn clients_list(&self) -> Vec<String> {
        self.clients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn default_client(&self) -> Option<String> {
        self.default_client
            .clone()
            .or_else(|| self.clients_list().into_iter().next())
    }

    pub fn is_known_client(&self, name: &str) -> bool {
        self.clients_list().iter().any(|c| c == name)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("branding.product_name"));
        }
        if self.clients_list().is_empty() {
            return Err(ValidationError::MissingRequired("branding.clients"));
        }
        if let Some(default) = &self.default_client {
            if !self.is_known_client(default) {
                return Err(ValidationError::UnknownDefaultClient(default.clone()));
            }
        }
        Ok(())
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            footer: default_footer(),
            clients: default_clients(),
            default_client: None,
        }
    }
}

fn default_product_name() -> String {
    "Mumbai House Price Estimator".to_string()
}

fn default_footer() -> String {
    "© 21DS_SkYAI · Built with Rust & axum".to_string()
}

fn default_clients() -> String {
    "Internal Demo,ABC Realty,XYZ Developers,Private Client".to_string()
}
