//! Read models for the report pipeline
//!
//! The document tree is the query-side view of a scored session: denormalized,
//! sanitized and ready for any serializer.

mod decoded_photos;
mod report_document;
mod report_document_builder;

pub use decoded_photos::{DecodedPhotos, PhotoSlot};
pub use report_document::{
    Alignment, Block, DocumentMetadata, HeadingLevel, ImageRun, Inline, Paragraph,
    ReportDocument, Spacing, Table, TableCell, TableRow, TextRun, HEADER_SHADING,
    PHOTO_HEIGHT_PX, PHOTO_WIDTH_PX, REPORT_FONT, REPORT_FONT_SIZE,
};
pub use report_document_builder::{
    ReportDocumentBuilder, BREAKDOWN_HEADING, MAINTENANCE_HEADING, NON_MAINTENANCE_HEADING,
    NO_MAINTENANCE_DEFECTS, SUMMARY_HEADING,
};
