use crate::application::dto::MetricsRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// MetricsPublisher port for sending audit metrics to an external collector
///
/// # Async Support
/// Publishing is a network call, so the method is async. Implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait MetricsPublisher: Send + Sync {
    /// Sends one metrics record
    ///
    /// # Errors
    /// Returns `AuditError::PublishFailed` if the request cannot be sent or the
    /// collector answers with a non-success status
    async fn publish(&self, record: &MetricsRecord) -> Result<()>;

    /// Human-readable destination, used in status messages
    fn endpoint(&self) -> &str;
}
