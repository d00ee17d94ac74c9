use serde::{Deserialize, Serialize};

/// Metrics derived from a session. Never stored; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSnapshot {
    /// Sum of pass tallies across maintenance categories
    pub pass_tally_total: u64,
    /// Number of observations in maintenance categories
    pub maintenance_observation_count: u64,
    /// Sum of non-compliance counts across those observations
    pub maintenance_defect_total: u64,
    /// Pass tallies plus maintenance observations
    pub total_assets_checked: u64,
    /// Defects per checked asset, fixed to three decimals
    pub site_issue_score: String,
    /// Share of checked assets that passed, 0 to 100
    pub compliance_percentage: u8,
}

impl ComplianceSnapshot {
    /// SIS as a number, for threshold comparisons
    pub fn site_issue_score_value(&self) -> f64 {
        self.site_issue_score.parse().unwrap_or(0.0)
    }
}
