//! site-inspector - inspection scoring and report generation for site audits
//!
//! This library scores an exported site inspection session (maintenance compliance and
//! Site Issue Score) and renders the audit report as a Word document or Markdown,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inspection`): Session model, scoring, sanitization and policies
//! - **Application Layer** (`application`): Use cases, DTOs and the report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use site_inspector::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateReportUseCase::new(
//!     JsonSessionReader::new(),
//!     StderrProgressReporter::new(),
//!     Box::new(DocxSerializer::new()),
//! );
//!
//! // Execute
//! let request = ReportRequest::new(PathBuf::from("audit.json"));
//! let response = use_case.execute(request).await?;
//!
//! // Present output
//! if let Some(bytes) = response.document {
//!     FileSystemWriter::new(PathBuf::from(&response.file_name)).present(&bytes)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inspection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonSessionReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::WebhookMetricsPublisher;
    pub use crate::adapters::outbound::serializers::{DocxSerializer, MarkdownSerializer};
    pub use crate::application::dto::{
        MetricsRecord, OutputFormat, PublishOutcome, ReportRequest, ReportResponse,
    };
    pub use crate::application::read_models::{ReportDocument, ReportDocumentBuilder};
    pub use crate::application::use_cases::{GenerateReportUseCase, PublishMetricsUseCase};
    pub use crate::inspection::domain::{
        AssetCategory, ComplianceSnapshot, InspectionSession, Observation, ObservationCategory,
        RiskLevel, ScoringConfig, SiteType,
    };
    pub use crate::inspection::policies::RiskPalette;
    pub use crate::inspection::services::{
        AlertEvaluator, AlertFlags, ComplianceScorer, ReportFileName, TextSanitizer,
    };
    pub use crate::ports::outbound::{
        MetricsPublisher, OutputPresenter, ProgressReporter, ReportSerializer, SessionReader,
    };
    pub use crate::shared::Result;
}
