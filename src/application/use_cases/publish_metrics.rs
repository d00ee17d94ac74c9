use crate::application::dto::{MetricsRecord, PublishOutcome};
use crate::inspection::domain::InspectionSession;
use crate::inspection::services::ComplianceScorer;
use crate::ports::outbound::{MetricsPublisher, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;

/// PublishMetricsUseCase - Sends a session's headline metrics to a webhook
///
/// # Type Parameters
/// * `P` - MetricsPublisher implementation
/// * `PR` - ProgressReporter implementation
pub struct PublishMetricsUseCase<P, PR> {
    publisher: P,
    progress_reporter: PR,
}

impl<P, PR> PublishMetricsUseCase<P, PR>
where
    P: MetricsPublisher,
    PR: ProgressReporter,
{
    pub fn new(publisher: P, progress_reporter: PR) -> Self {
        Self {
            publisher,
            progress_reporter,
        }
    }

    /// Scores the session and publishes the resulting record
    ///
    /// # Errors
    /// Returns the publisher's error unchanged; nothing is retried
    pub async fn execute(&self, session: &InspectionSession) -> Result<PublishOutcome> {
        let snapshot = ComplianceScorer::score(session);
        let record = MetricsRecord::new(session, &snapshot, Utc::now());

        self.progress_reporter.report(&format!(
            "📡 Publishing metrics to {}...",
            self.publisher.endpoint()
        ));
        tracing::debug!(endpoint = self.publisher.endpoint(), ?record, "publishing metrics");

        self.publisher.publish(&record).await?;

        self.progress_reporter
            .report_completion("✅ Metrics published successfully");

        Ok(PublishOutcome {
            endpoint: self.publisher.endpoint().to_string(),
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::{AssetCategory, Observation, ScoringConfig, SiteType};
    use crate::shared::error::AuditError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockPublisher {
        sent: Arc<Mutex<Vec<MetricsRecord>>>,
        fail: bool,
    }

    #[async_trait]
    impl MetricsPublisher for MockPublisher {
        async fn publish(&self, record: &MetricsRecord) -> Result<()> {
            if self.fail {
                return Err(AuditError::PublishFailed {
                    endpoint: self.endpoint().to_string(),
                    details: "Server responded with 503".to_string(),
                }
                .into());
            }
            self.sent.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn endpoint(&self) -> &str {
            "https://hooks.example.com/audit"
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn create_test_session() -> InspectionSession {
        let pumps = AssetCategory::new("Pumps").unwrap();
        let config = ScoringConfig::new(vec![pumps.clone()]).unwrap();
        let mut session = InspectionSession::new(
            "J. Smith",
            "North Field",
            SiteType::WaterTreatment,
            "16/10/2026",
            config,
        );
        session.compliant_tally.insert("Pumps".to_string(), 3);
        session
            .add_observation(Observation::new(pumps.into(), "Pump 4").with_non_compliance_count(2))
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_publishes_scored_record() {
        let publisher = MockPublisher::default();
        let use_case = PublishMetricsUseCase::new(publisher.clone(), SilentReporter);

        let outcome = use_case.execute(&create_test_session()).await.unwrap();

        assert_eq!(outcome.endpoint, "https://hooks.example.com/audit");
        assert_eq!(outcome.record.total_assets, 4);
        assert_eq!(outcome.record.total_issues, 2);
        assert_eq!(outcome.record.site_issue_score, "0.500");
        assert_eq!(outcome.record.compliance_percentage, 75);

        let sent = publisher.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].site_name, "North Field");
    }

    #[tokio::test]
    async fn test_publish_failure_is_returned() {
        let publisher = MockPublisher {
            fail: true,
            ..MockPublisher::default()
        };
        let use_case = PublishMetricsUseCase::new(publisher, SilentReporter);

        let err = use_case.execute(&create_test_session()).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
