use crate::application::read_models::ReportDocument;
use crate::shared::Result;

/// ReportSerializer port for packaging a report document
///
/// Implementations turn the format-neutral tree into the bytes of one output
/// format (OOXML `.docx`, Markdown, ...).
pub trait ReportSerializer {
    /// Serializes the whole document
    ///
    /// The returned bytes are a complete file. Nothing partial is ever returned.
    ///
    /// # Errors
    /// Returns `AuditError::ReportGenerationFailed` if packaging fails at any point
    fn serialize(&self, document: &ReportDocument) -> Result<Vec<u8>>;

    /// File extension of the produced format, without the dot
    fn file_extension(&self) -> &'static str;
}
