use crate::inspection::domain::{ComplianceSnapshot, ScoringConfig};
use serde::Serialize;

/// Which dashboard alerts a snapshot trips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFlags {
    /// SIS is above the configured threshold
    pub sis_alert: bool,
    /// Compliance is below the configured threshold
    pub compliance_alert: bool,
}

impl AlertFlags {
    pub fn any(&self) -> bool {
        self.sis_alert || self.compliance_alert
    }
}

/// AlertEvaluator compares scored metrics against the session's display thresholds.
///
/// Kept apart from `ComplianceScorer` so scoring stays a pure metrics function.
pub struct AlertEvaluator;

impl AlertEvaluator {
    pub fn evaluate(snapshot: &ComplianceSnapshot, config: &ScoringConfig) -> AlertFlags {
        AlertFlags {
            sis_alert: snapshot.site_issue_score_value() > config.sis_threshold,
            compliance_alert: f64::from(snapshot.compliance_percentage)
                < config.compliance_threshold,
        }
    }
}
