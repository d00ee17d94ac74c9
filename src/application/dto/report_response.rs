use crate::inspection::domain::{ComplianceSnapshot, InspectionSession};
use crate::inspection::services::AlertFlags;

/// ReportResponse - Internal response DTO from the report generation use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// The session as scored, with any threshold overrides applied
    pub session: InspectionSession,
    pub snapshot: ComplianceSnapshot,
    pub alerts: AlertFlags,
    /// Serialized report; `None` in summary-only mode
    pub document: Option<Vec<u8>>,
    /// Suggested file name for the serialized report
    pub file_name: String,
    /// Photos that decoded and were embedded
    pub embedded_photos: usize,
}
