use super::category::{AssetCategory, ObservationCategory};
use super::observation::Observation;
use super::scoring_config::ScoringConfig;
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Kind of treatment works being audited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteType {
    #[default]
    #[serde(rename = "WTW", alias = "WaterTreatment")]
    WaterTreatment,
    #[serde(rename = "STW", alias = "SewageTreatment")]
    SewageTreatment,
}

impl SiteType {
    /// Short code used in titles and file names
    pub fn code(&self) -> &'static str {
        match self {
            SiteType::WaterTreatment => "WTW",
            SiteType::SewageTreatment => "STW",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SiteType::WaterTreatment => "Water Treatment Works",
            SiteType::SewageTreatment => "Sewage Treatment Works",
        }
    }
}

impl std::fmt::Display for SiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One site audit: who inspected what, the pass tallies and the logged defects
///
/// The report engine only ever borrows a session. The mutators below exist for the
/// capture side, which owns its session value outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionSession {
    #[serde(rename = "userName", alias = "inspector", default)]
    pub inspector: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_type: SiteType,
    #[serde(default)]
    pub date: String,
    /// Pass tallies keyed by category name. Stored raw; read through `tally_for`.
    #[serde(rename = "compliantCounts", default)]
    pub compliant_tally: BTreeMap<String, i64>,
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub config: ScoringConfig,
}

impl InspectionSession {
    pub fn new(
        inspector: impl Into<String>,
        site_name: impl Into<String>,
        site_type: SiteType,
        date: impl Into<String>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            inspector: inspector.into(),
            site_name: site_name.into(),
            site_type,
            date: date.into(),
            compliant_tally: BTreeMap::new(),
            observations: Vec::new(),
            config,
        }
    }

    /// Pass tally for a category; absent and negative entries read as zero
    pub fn tally_for(&self, category: &AssetCategory) -> u64 {
        self.compliant_tally
            .get(category.as_str())
            .map(|&count| count.max(0) as u64)
            .unwrap_or(0)
    }

    pub fn increment_tally(&mut self, category: &AssetCategory) {
        let entry = self
            .compliant_tally
            .entry(category.as_str().to_string())
            .or_insert(0);
        *entry = (*entry).max(0).saturating_add(1);
    }

    /// Decrements a tally, never going below zero
    pub fn decrement_tally(&mut self, category: &AssetCategory) {
        if let Some(entry) = self.compliant_tally.get_mut(category.as_str()) {
            *entry = entry.saturating_sub(1).max(0);
        }
    }

    /// # Errors
    /// Returns a validation error if an observation with the same id exists
    pub fn add_observation(&mut self, observation: Observation) -> Result<()> {
        if self.observations.iter().any(|o| o.id == observation.id) {
            return Err(AuditError::Validation {
                message: format!("Observation '{}' already exists", observation.id),
            }
            .into());
        }
        self.observations.push(observation);
        Ok(())
    }

    /// Replaces the whole record with the same id, keeping its position
    ///
    /// # Errors
    /// Returns a validation error if no observation has that id, or if the
    /// replacement is filed under a different category
    pub fn replace_observation(&mut self, observation: Observation) -> Result<()> {
        let slot = self
            .observations
            .iter_mut()
            .find(|o| o.id == observation.id)
            .ok_or_else(|| AuditError::Validation {
                message: format!("Observation '{}' does not exist", observation.id),
            })?;

        if slot.category != observation.category {
            return Err(AuditError::Validation {
                message: format!(
                    "Observation '{}' cannot move from '{}' to '{}'",
                    observation.id, slot.category, observation.category
                ),
            }
            .into());
        }

        *slot = observation;
        Ok(())
    }

    pub fn remove_observation(&mut self, id: &str) -> Option<Observation> {
        let index = self.observations.iter().position(|o| o.id == id)?;
        Some(self.observations.remove(index))
    }

    /// Discards all audit data, keeping the scoring settings
    pub fn reset(&mut self) {
        self.inspector.clear();
        self.site_name.clear();
        self.date.clear();
        self.compliant_tally.clear();
        self.observations.clear();
    }

    /// Observations filed under a configured maintenance category, in logged order
    pub fn maintenance_observations(&self) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(move |o| self.config.counts_toward_scoring(&o.category))
    }

    /// Observations filed under the non-maintenance sentinel, in logged order
    pub fn non_maintenance_observations(&self) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(|o| o.category == ObservationCategory::NonMaintenance)
    }

    /// Input validation applied before a session reaches the scoring engine
    ///
    /// # Errors
    /// Returns the first validation failure found in the config or observations
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let mut ids = HashSet::new();
        for observation in &self.observations {
            observation.validate()?;
            if !ids.insert(observation.id.as_str()) {
                return Err(AuditError::Validation {
                    message: format!("Observation id '{}' is used more than once", observation.id),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pumps() -> AssetCategory {
        AssetCategory::new("Pumps").unwrap()
    }

    fn session() -> InspectionSession {
        InspectionSession::new(
            "J. Smith",
            "Northfield",
            SiteType::WaterTreatment,
            "16/10/2026",
            ScoringConfig::new(vec![pumps()]).unwrap(),
        )
    }

    #[test]
    fn test_site_type_codes() {
        assert_eq!(SiteType::WaterTreatment.code(), "WTW");
        assert_eq!(SiteType::SewageTreatment.to_string(), "STW");
        let parsed: SiteType = serde_json::from_str("\"SewageTreatment\"").unwrap();
        assert_eq!(parsed, SiteType::SewageTreatment);
    }

    #[test]
    fn test_tally_increment_and_clamped_decrement() {
        let mut session = session();
        session.increment_tally(&pumps());
        session.increment_tally(&pumps());
        assert_eq!(session.tally_for(&pumps()), 2);

        session.decrement_tally(&pumps());
        session.decrement_tally(&pumps());
        session.decrement_tally(&pumps());
        assert_eq!(session.tally_for(&pumps()), 0);
    }

    #[test]
    fn test_decrement_at_minimum_tally_does_not_overflow() {
        let mut session = session();
        session.compliant_tally.insert("Pumps".to_string(), i64::MIN);
        session.decrement_tally(&pumps());
        assert_eq!(session.compliant_tally["Pumps"], 0);
    }

    #[test]
    fn test_negative_tally_reads_as_zero() {
        let mut session = session();
        session.compliant_tally.insert("Pumps".to_string(), -4);
        assert_eq!(session.tally_for(&pumps()), 0);
    }

    #[test]
    fn test_add_observation_rejects_duplicate_id() {
        let mut session = session();
        let obs = Observation::new(pumps().into(), "Pump 1").with_id("a");
        session.add_observation(obs.clone()).unwrap();
        assert!(session.add_observation(obs).is_err());
    }

    #[test]
    fn test_replace_observation_keeps_position() {
        let mut session = session();
        session
            .add_observation(Observation::new(pumps().into(), "Pump 1").with_id("a"))
            .unwrap();
        session
            .add_observation(Observation::new(pumps().into(), "Pump 2").with_id("b"))
            .unwrap();

        let edited = Observation::new(pumps().into(), "Pump 1 (edited)").with_id("a");
        session.replace_observation(edited).unwrap();
        assert_eq!(session.observations[0].asset_name, "Pump 1 (edited)");
        assert_eq!(session.observations[1].id, "b");
    }

    #[test]
    fn test_replace_observation_rejects_category_change() {
        let mut session = session();
        session
            .add_observation(Observation::new(pumps().into(), "Pump 1").with_id("a"))
            .unwrap();
        let moved = Observation::new(ObservationCategory::NonMaintenance, "Pump 1").with_id("a");
        assert!(session.replace_observation(moved).is_err());
    }

    #[test]
    fn test_remove_observation() {
        let mut session = session();
        session
            .add_observation(Observation::new(pumps().into(), "Pump 1").with_id("a"))
            .unwrap();
        assert!(session.remove_observation("missing").is_none());
        assert_eq!(session.remove_observation("a").unwrap().asset_name, "Pump 1");
        assert!(session.observations.is_empty());
    }

    #[test]
    fn test_reset_discards_data_but_keeps_config() {
        let mut session = session();
        session.increment_tally(&pumps());
        session
            .add_observation(Observation::new(pumps().into(), "Pump 1"))
            .unwrap();
        session.reset();
        assert!(session.observations.is_empty());
        assert!(session.compliant_tally.is_empty());
        assert!(session.site_name.is_empty());
        assert_eq!(session.config.categories, vec![pumps()]);
    }

    #[test]
    fn test_partition_skips_unconfigured_categories() {
        let mut session = session();
        let valves = ObservationCategory::parse("Valves").unwrap();
        session.add_observation(Observation::new(pumps().into(), "P")).unwrap();
        session.add_observation(Observation::new(valves, "V")).unwrap();
        session
            .add_observation(Observation::new(ObservationCategory::NonMaintenance, "Rail"))
            .unwrap();

        assert_eq!(session.maintenance_observations().count(), 1);
        assert_eq!(session.non_maintenance_observations().count(), 1);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut session = session();
        session
            .observations
            .push(Observation::new(pumps().into(), "P").with_id("dup"));
        session
            .observations
            .push(Observation::new(pumps().into(), "Q").with_id("dup"));
        let err = session.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_deserialize_app_export() {
        let json = r#"{
            "userName": "A. Inspector",
            "siteName": "Riverside",
            "siteType": "STW",
            "date": "01/02/2026",
            "compliantCounts": { "Pumps": 4, "Motors": 2 },
            "observations": [],
            "config": { "sisThreshold": 0.5, "complianceThreshold": 85,
                        "categories": ["Pumps", "Motors"], "debugMode": false }
        }"#;
        let session: InspectionSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.inspector, "A. Inspector");
        assert_eq!(session.site_type, SiteType::SewageTreatment);
        assert_eq!(session.tally_for(&pumps()), 4);
        assert_eq!(session.config.categories.len(), 2);
    }
}
