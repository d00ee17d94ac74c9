use super::category::{AssetCategory, ObservationCategory};
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Default SIS above which the dashboard raises an alert
pub const DEFAULT_SIS_THRESHOLD: f64 = 0.5;

/// Default compliance percentage below which the dashboard raises an alert
pub const DEFAULT_COMPLIANCE_THRESHOLD: f64 = 85.0;

fn default_sis_threshold() -> f64 {
    DEFAULT_SIS_THRESHOLD
}

fn default_compliance_threshold() -> f64 {
    DEFAULT_COMPLIANCE_THRESHOLD
}

/// Session-wide scoring settings
///
/// `categories` is the ordered list of maintenance categories. Only these count
/// toward SIS and compliance, and their order is the row order of the breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(default = "default_sis_threshold")]
    pub sis_threshold: f64,
    #[serde(default = "default_compliance_threshold")]
    pub compliance_threshold: f64,
    #[serde(
        default = "AssetCategory::defaults",
        deserialize_with = "maintenance_categories"
    )]
    pub categories: Vec<AssetCategory>,
    #[serde(default)]
    pub debug_mode: bool,
}

impl ScoringConfig {
    /// Creates a config with default thresholds for the given categories
    ///
    /// # Errors
    /// Returns a validation error if a category name repeats
    pub fn new(categories: Vec<AssetCategory>) -> Result<Self> {
        let config = Self {
            categories,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_thresholds(mut self, sis_threshold: f64, compliance_threshold: f64) -> Self {
        self.sis_threshold = sis_threshold;
        self.compliance_threshold = compliance_threshold;
        self
    }

    pub fn is_maintenance_category(&self, category: &AssetCategory) -> bool {
        self.categories.contains(category)
    }

    /// True when an observation filed under `category` counts toward scoring
    pub fn counts_toward_scoring(&self, category: &ObservationCategory) -> bool {
        category
            .asset_category()
            .is_some_and(|c| self.is_maintenance_category(c))
    }

    /// # Errors
    /// Returns a validation error for duplicate categories or non-finite thresholds
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.as_str()) {
                return Err(AuditError::Validation {
                    message: format!("Category '{}' is listed more than once", category),
                }
                .into());
            }
        }

        if !self.sis_threshold.is_finite() || !self.compliance_threshold.is_finite() {
            return Err(AuditError::Validation {
                message: "Alert thresholds must be finite numbers".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sis_threshold: DEFAULT_SIS_THRESHOLD,
            compliance_threshold: DEFAULT_COMPLIANCE_THRESHOLD,
            categories: AssetCategory::defaults(),
            debug_mode: false,
        }
    }
}

/// Reads the category list, dropping the reserved non-maintenance name if an older
/// export listed it.
fn maintenance_categories<'de, D>(deserializer: D) -> std::result::Result<Vec<AssetCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        match ObservationCategory::parse(name).map_err(serde::de::Error::custom)? {
            ObservationCategory::Maintenance(category) => categories.push(category),
            ObservationCategory::NonMaintenance => {}
        }
    }
    Ok(categories)
}
