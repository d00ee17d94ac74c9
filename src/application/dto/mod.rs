/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI, the use cases and the
/// outbound adapters, keeping the domain layer isolated.
mod metrics_record;
mod output_format;
mod report_request;
mod report_response;

pub use metrics_record::{MetricsRecord, PublishOutcome};
pub use output_format::OutputFormat;
pub use report_request::{ReportRequest, DEFAULT_DECODE_CONCURRENCY};
pub use report_response::ReportResponse;
