use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::{DecodedPhotos, PhotoSlot, ReportDocumentBuilder};
use crate::inspection::domain::InspectionSession;
use crate::inspection::services::{
    AlertEvaluator, ComplianceScorer, DecodedImage, ImagePayloadDecoder, ReportFileName,
};
use crate::ports::outbound::{ProgressReporter, ReportSerializer, SessionReader};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::path::Path;

/// Progress bar label while photos are decoded
const DECODE_PROGRESS_LABEL: &str = "Decoding photos";

/// GenerateReportUseCase - Core use case for report generation
///
/// Orchestrates the pipeline: read session → score → decode photos → build the
/// document tree → serialize. All infrastructure is injected.
///
/// # Type Parameters
/// * `SR` - SessionReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<SR, PR> {
    session_reader: SR,
    progress_reporter: PR,
    serializer: Box<dyn ReportSerializer>,
}

impl<SR, PR> GenerateReportUseCase<SR, PR>
where
    SR: SessionReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        session_reader: SR,
        progress_reporter: PR,
        serializer: Box<dyn ReportSerializer>,
    ) -> Self {
        Self {
            session_reader,
            progress_reporter,
            serializer,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Returns
    /// ReportResponse with the metrics, the alert flags and, unless in summary-only
    /// mode, the serialized report
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let session = self.load_session(&request.session_path)?;
        self.generate(session, &request).await
    }

    /// Step 1: Reads and validates the session
    pub fn load_session(&self, path: &Path) -> Result<InspectionSession> {
        self.progress_reporter
            .report(&format!("📖 Loading inspection session from: {}", path.display()));

        let session = self.session_reader.read_session(path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} observation(s) across {} configured categor{}",
            session.observations.len(),
            session.config.categories.len(),
            if session.config.categories.len() == 1 { "y" } else { "ies" }
        ));
        Ok(session)
    }

    /// Steps 2-5 on an already loaded session
    pub async fn generate(
        &self,
        mut session: InspectionSession,
        request: &ReportRequest,
    ) -> Result<ReportResponse> {
        Self::apply_threshold_overrides(&mut session, request)?;

        // Step 2: Score
        let snapshot = ComplianceScorer::score(&session);
        let alerts = AlertEvaluator::evaluate(&snapshot, &session.config);
        tracing::debug!(
            total_assets = snapshot.total_assets_checked,
            sis = %snapshot.site_issue_score,
            compliance = snapshot.compliance_percentage,
            "session scored"
        );
        self.progress_reporter.report(&format!(
            "📊 Scored {} asset(s): SIS {}, compliance {}%",
            snapshot.total_assets_checked,
            snapshot.site_issue_score,
            snapshot.compliance_percentage
        ));

        let file_name = ReportFileName::suggest(
            &session.site_name,
            request.generated_at,
            self.serializer.file_extension(),
        );

        if request.summary_only {
            return Ok(ReportResponse {
                session,
                snapshot,
                alerts,
                document: None,
                file_name,
                embedded_photos: 0,
            });
        }

        // Step 3: Decode photos
        let photos = self
            .decode_photos(&session, request.decode_concurrency)
            .await;

        // Step 4: Build the document tree
        let document = ReportDocumentBuilder::build(&session, &snapshot, &photos);
        let embedded_photos = document.images().count();

        // Step 5: Serialize
        self.progress_reporter.report(&format!(
            "📝 Generating {} report...",
            self.serializer.file_extension()
        ));
        let bytes = self.serializer.serialize(&document)?;

        Ok(ReportResponse {
            session,
            snapshot,
            alerts,
            document: Some(bytes),
            file_name,
            embedded_photos,
        })
    }

    fn apply_threshold_overrides(
        session: &mut InspectionSession,
        request: &ReportRequest,
    ) -> Result<()> {
        if request.sis_threshold.is_none() && request.compliance_threshold.is_none() {
            return Ok(());
        }

        let config = session.config.clone().with_thresholds(
            request.sis_threshold.unwrap_or(session.config.sis_threshold),
            request
                .compliance_threshold
                .unwrap_or(session.config.compliance_threshold),
        );
        config.validate()?;
        session.config = config;
        Ok(())
    }

    /// Decodes every photo on the blocking pool
    ///
    /// Results arrive out of order and are re-sorted by slot, so the outcome is
    /// identical to `DecodedPhotos::decode_sequential`. A decode task that fails to
    /// join counts as an undecodable photo.
    async fn decode_photos(&self, session: &InspectionSession, concurrency: usize) -> DecodedPhotos {
        let jobs: Vec<(PhotoSlot, String)> = DecodedPhotos::slots(session)
            .map(|(slot, payload)| (slot, payload.to_string()))
            .collect();
        let total = jobs.len();

        if total == 0 {
            return DecodedPhotos::from_slots(session.observations.len(), Vec::new());
        }

        self.progress_reporter
            .report(&format!("🖼️  Decoding {} photo(s)...", total));

        let mut decoded = stream::iter(jobs)
            .map(|(slot, payload)| async move {
                let image = tokio::task::spawn_blocking(move || ImagePayloadDecoder::decode(&payload))
                    .await
                    .unwrap_or_else(|err| {
                        tracing::debug!(?slot, error = %err, "photo decode task failed");
                        None
                    });
                (slot, image)
            })
            .buffer_unordered(concurrency.max(1));

        let mut results: Vec<(PhotoSlot, Option<DecodedImage>)> = Vec::with_capacity(total);
        while let Some((slot, image)) = decoded.next().await {
            if image.is_none() {
                tracing::debug!(
                    observation = slot.observation,
                    photo = slot.photo,
                    "skipping undecodable photo payload"
                );
            }
            results.push((slot, image));
            self.progress_reporter
                .report_progress(results.len(), total, Some(DECODE_PROGRESS_LABEL));
        }

        let skipped = results.iter().filter(|(_, image)| image.is_none()).count();
        if skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} photo(s) could not be decoded and were left out of the report",
                skipped
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Photo decoding complete: {} of {} embedded",
            total - skipped,
            total
        ));

        DecodedPhotos::from_slots(session.observations.len(), results)
    }
}
