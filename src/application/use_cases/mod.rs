/// Use cases module containing application business logic orchestration
mod generate_report;
mod publish_metrics;

pub use generate_report::GenerateReportUseCase;
pub use publish_metrics::PublishMetricsUseCase;
