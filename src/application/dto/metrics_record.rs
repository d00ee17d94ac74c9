use crate::inspection::domain::{ComplianceSnapshot, InspectionSession};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON body sent to the metrics webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    pub site_name: String,
    pub site_type: String,
    pub inspector: String,
    pub date: String,
    pub site_issue_score: String,
    pub compliance_percentage: u8,
    pub total_assets: u64,
    pub total_issues: u64,
    pub timestamp: DateTime<Utc>,
}

impl MetricsRecord {
    pub fn new(
        session: &InspectionSession,
        snapshot: &ComplianceSnapshot,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            site_name: session.site_name.clone(),
            site_type: session.site_type.code().to_string(),
            inspector: session.inspector.clone(),
            date: session.date.clone(),
            site_issue_score: snapshot.site_issue_score.clone(),
            compliance_percentage: snapshot.compliance_percentage,
            total_assets: snapshot.total_assets_checked,
            total_issues: snapshot.maintenance_defect_total,
            timestamp,
        }
    }
}

/// Result of a successful publish
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub endpoint: String,
    pub record: MetricsRecord,
}
