/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system, the console and the network.
pub mod metrics_publisher;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_serializer;
pub mod session_reader;

pub use metrics_publisher::MetricsPublisher;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_serializer::ReportSerializer;
pub use session_reader::SessionReader;
