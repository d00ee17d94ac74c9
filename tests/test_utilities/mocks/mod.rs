/// Mock implementations for testing
mod mock_metrics_publisher;
mod mock_progress_reporter;
mod mock_session_reader;

pub use mock_metrics_publisher::MockMetricsPublisher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_session_reader::MockSessionReader;
