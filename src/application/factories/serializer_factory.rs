use crate::adapters::outbound::serializers::{DocxSerializer, MarkdownSerializer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportSerializer;

/// Factory for creating report serializers
///
/// Selects the serializer adapter for an output format so the use case only ever
/// sees the `ReportSerializer` port.
pub struct SerializerFactory;

impl SerializerFactory {
    /// Creates a serializer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use site_inspector::application::dto::OutputFormat;
    /// use site_inspector::application::factories::SerializerFactory;
    ///
    /// let serializer = SerializerFactory::create(OutputFormat::Docx);
    /// assert_eq!(serializer.file_extension(), "docx");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportSerializer> {
        match format {
            OutputFormat::Docx => Box::new(DocxSerializer::new()),
            OutputFormat::Markdown => Box::new(MarkdownSerializer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use site_inspector::application::dto::OutputFormat;
    /// use site_inspector::application::factories::SerializerFactory;
    ///
    /// let message = SerializerFactory::progress_message(OutputFormat::Docx);
    /// assert_eq!(message, "📝 Generating Word (.docx) report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Docx => "📝 Generating Word (.docx) report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
