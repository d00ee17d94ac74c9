/// Serializer adapters turning a report document into file bytes
mod docx;
mod markdown_serializer;

pub use docx::DocxSerializer;
pub use markdown_serializer::MarkdownSerializer;
