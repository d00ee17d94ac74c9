use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// Photos decoded at the same time on the blocking pool
pub const DEFAULT_DECODE_CONCURRENCY: usize = 4;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the exported session JSON
    pub session_path: PathBuf,
    /// Score only; skip photo decoding and serialization
    pub summary_only: bool,
    /// Overrides the session's SIS alert threshold
    pub sis_threshold: Option<f64>,
    /// Overrides the session's compliance alert threshold
    pub compliance_threshold: Option<f64>,
    /// Timestamp used in the suggested file name
    pub generated_at: NaiveDateTime,
    pub decode_concurrency: usize,
}

impl ReportRequest {
    pub fn new(session_path: PathBuf) -> Self {
        Self {
            session_path,
            summary_only: false,
            sis_threshold: None,
            compliance_threshold: None,
            generated_at: Local::now().naive_local(),
            decode_concurrency: DEFAULT_DECODE_CONCURRENCY,
        }
    }

    pub fn with_summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }

    pub fn with_thresholds(
        mut self,
        sis_threshold: Option<f64>,
        compliance_threshold: Option<f64>,
    ) -> Self {
        self.sis_threshold = sis_threshold;
        self.compliance_threshold = compliance_threshold;
        self
    }

    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_decode_concurrency(mut self, concurrency: usize) -> Self {
        self.decode_concurrency = concurrency.max(1);
        self
    }
}
