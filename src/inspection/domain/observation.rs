use super::category::ObservationCategory;
use crate::shared::error::AuditError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of photos attached to a single observation
pub const MAX_PHOTOS_PER_OBSERVATION: usize = 10;

/// Maximum length for asset names (security limit)
const MAX_ASSET_NAME_LENGTH: usize = 255;

/// Risk rating of a defect. Display only; it never changes a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    #[serde(rename = "Low", alias = "LOW", alias = "low")]
    Low,
    #[serde(rename = "Med", alias = "Medium", alias = "MED", alias = "MEDIUM", alias = "med")]
    Medium,
    #[serde(rename = "Hi", alias = "High", alias = "HI", alias = "HIGH", alias = "hi")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A captured photo as the app stores it: `<mime>;base64,<data>`
///
/// Kept opaque here; decoding happens only when the report is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoPayload(String);

impl PhotoPayload {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn generate_observation_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_non_compliance_count() -> u32 {
    1
}

/// A single logged defect against one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default = "generate_observation_id")]
    pub id: String,
    pub category: ObservationCategory,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub risk: RiskLevel,
    #[serde(default = "default_non_compliance_count")]
    pub non_compliance_count: u32,
    #[serde(default, with = "yes_no")]
    pub previously_seen: bool,
    #[serde(default, rename = "feedbackNotes", alias = "findings")]
    pub findings: String,
    #[serde(default)]
    pub short_term_fix: String,
    #[serde(default)]
    pub long_term_fix: String,
    #[serde(default)]
    pub action_owner: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<PhotoPayload>,
    #[serde(default, with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Observation {
    /// Creates an observation with a fresh id, a defect count of 1 and empty text fields
    pub fn new(category: ObservationCategory, asset_name: impl Into<String>) -> Self {
        Self {
            id: generate_observation_id(),
            category,
            asset_name: asset_name.into(),
            asset_id: None,
            risk: RiskLevel::default(),
            non_compliance_count: default_non_compliance_count(),
            previously_seen: false,
            findings: String::new(),
            short_term_fix: String::new(),
            long_term_fix: String::new(),
            action_owner: String::new(),
            notes: String::new(),
            photos: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    pub fn with_non_compliance_count(mut self, count: u32) -> Self {
        self.non_compliance_count = count;
        self
    }

    pub fn with_findings(mut self, findings: impl Into<String>) -> Self {
        self.findings = findings.into();
        self
    }

    pub fn with_photo(mut self, payload: impl Into<String>) -> Self {
        self.photos.push(PhotoPayload::new(payload));
        self
    }

    pub fn is_maintenance(&self) -> bool {
        self.category.is_maintenance()
    }

    /// Checks the fields the capture form makes mandatory
    ///
    /// # Errors
    /// Returns a validation error if the asset name is empty or too long, the defect
    /// count is zero, or more than ten photos are attached
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| -> Result<()> {
            Err(AuditError::Validation { message }.into())
        };

        if self.asset_name.trim().is_empty() {
            return fail(format!("Observation '{}' has no asset name", self.id));
        }
        if self.asset_name.chars().count() > MAX_ASSET_NAME_LENGTH {
            return fail(format!(
                "Observation '{}' asset name exceeds {} characters",
                self.id, MAX_ASSET_NAME_LENGTH
            ));
        }
        if self.non_compliance_count == 0 {
            return fail(format!(
                "Observation '{}' must record at least one non-compliance",
                self.id
            ));
        }
        if self.photos.len() > MAX_PHOTOS_PER_OBSERVATION {
            return fail(format!(
                "Observation '{}' has {} photos. Maximum allowed: {}",
                self.id,
                self.photos.len(),
                MAX_PHOTOS_PER_OBSERVATION
            ));
        }
        Ok(())
    }
}

/// The capture form stores the flag as "Yes"/"No"; older exports used booleans.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Flag(bool),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match RawFlag::deserialize(deserializer)? {
            RawFlag::Flag(flag) => Ok(flag),
            RawFlag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" => Ok(true),
                "no" | "n" | "false" | "" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "expected \"Yes\" or \"No\", got \"{}\"",
                    other
                ))),
            },
        }
    }
}
