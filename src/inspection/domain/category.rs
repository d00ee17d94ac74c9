use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Wire name of the reserved category for safety/PPE findings that never count
/// toward mechanical scoring.
pub const NON_MAINTENANCE_CATEGORY: &str = "Non-Maintenance";

/// Maximum length for category names
const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Categories a new session starts with
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Pumps", "Motors", "Compressors", "Electrical Panels"];

/// Sentinel test used on both sides of the partition
///
/// Matches after trimming and ignoring ASCII case, so `" non-maintenance "` is the
/// sentinel when parsed as an observation category and is rejected as an asset
/// category. No configured category can shadow the sentinel by spelling alone.
fn is_sentinel(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(NON_MAINTENANCE_CATEGORY)
}

/// NewType wrapper for a maintenance asset category name
///
/// The reserved `Non-Maintenance` name is rejected here, so a configured category
/// list can never contain the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetCategory(String);

impl AssetCategory {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AuditError::Validation {
                message: "Asset category name cannot be empty".to_string(),
            }
            .into());
        }

        if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
            return Err(AuditError::Validation {
                message: format!(
                    "Asset category name is too long ({} characters). Maximum allowed: {}",
                    name.chars().count(),
                    MAX_CATEGORY_NAME_LENGTH
                ),
            }
            .into());
        }

        if is_sentinel(&name) {
            return Err(AuditError::Validation {
                message: format!(
                    "'{}' is reserved and cannot be used as a maintenance category",
                    NON_MAINTENANCE_CATEGORY
                ),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The categories a freshly started audit is scored against
    pub fn defaults() -> Vec<AssetCategory> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| AssetCategory(name.to_string()))
            .collect()
    }
}

impl TryFrom<String> for AssetCategory {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AssetCategory> for String {
    fn from(category: AssetCategory) -> Self {
        category.0
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The category an observation is filed under.
///
/// Maintenance and non-maintenance findings are separate variants so the scoring
/// partition is decided by type, not by comparing strings at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ObservationCategory {
    Maintenance(AssetCategory),
    NonMaintenance,
}

impl ObservationCategory {
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if is_sentinel(&name) {
            return Ok(ObservationCategory::NonMaintenance);
        }
        Ok(ObservationCategory::Maintenance(AssetCategory::new(name)?))
    }

    pub fn is_maintenance(&self) -> bool {
        matches!(self, ObservationCategory::Maintenance(_))
    }

    pub fn asset_category(&self) -> Option<&AssetCategory> {
        match self {
            ObservationCategory::Maintenance(category) => Some(category),
            ObservationCategory::NonMaintenance => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ObservationCategory::Maintenance(category) => category.as_str(),
            ObservationCategory::NonMaintenance => NON_MAINTENANCE_CATEGORY,
        }
    }
}

impl From<AssetCategory> for ObservationCategory {
    fn from(category: AssetCategory) -> Self {
        ObservationCategory::Maintenance(category)
    }
}

impl TryFrom<String> for ObservationCategory {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ObservationCategory> for String {
    fn from(category: ObservationCategory) -> Self {
        category.name().to_string()
    }
}

impl std::fmt::Display for ObservationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
