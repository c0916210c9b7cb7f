//! Rules configuration validation with structured errors and suggestions.
//!
//! Checks a [`RulesConfig`] against the asset catalog it will be resolved
//! with: unknown asset types and attributes are errors (with "did you mean"
//! suggestions), configurations that resolve in surprising ways are warnings.
//! Resolution itself never fails on these; validation is advisory for hosts
//! that edit configuration files.

mod asset_checks;

pub mod fuzzy;

use ruledesk_core::AssetTypeDescriptor;
use serde::{Deserialize, Serialize};

use crate::schema::RulesConfig;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// JSON-path-like location, e.g. `"descriptors.when.includeAssets[0]"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: Option<&str>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: suggestion.map(|s| format!("Did you mean '{}'?", s)),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a parsed [`RulesConfig`] against the catalog descriptors.
pub fn validate_config(config: &RulesConfig, catalog: &[AssetTypeDescriptor]) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some(descriptors) = &config.descriptors {
        asset_checks::validate_sections(descriptors, catalog, &mut result);
    }
    result
}

/// Parse raw YAML and validate. Returns parse errors merged with validation errors.
pub fn validate_yaml(yaml: &str, catalog: &[AssetTypeDescriptor]) -> ValidationResult {
    match serde_yaml::from_str::<RulesConfig>(yaml) {
        Ok(config) => validate_config(&config, catalog),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("YAML parse error: {e}"));
            result
        }
    }
}

#[cfg(test)]
mod tests;
