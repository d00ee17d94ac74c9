use crate::shared::Result;

/// OutputPresenter port for delivering a finished report
///
/// Abstracts the destination (stdout, a file, ...) of the serialized bytes.
pub trait OutputPresenter {
    /// Writes the complete report to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination cannot be written
    /// - The destination path fails the security checks (symlinks, missing directory)
    fn present(&self, content: &[u8]) -> Result<()>;
}
