//! Office Open XML (WordprocessingML) report serializer

mod document_xml;
mod package_parts;

use crate::application::read_models::ReportDocument;
use crate::ports::outbound::ReportSerializer;
use crate::shared::error::AuditError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// DocxSerializer adapter packaging a report as a `.docx` file
///
/// The package is assembled in memory. Bytes are only handed back once every part
/// has been written and the zip central directory is finished.
pub struct DocxSerializer {
    created: DateTime<Utc>,
}

impl DocxSerializer {
    pub fn new() -> Self {
        Self {
            created: Utc::now(),
        }
    }

    /// Fixes the creation timestamp written to `docProps/core.xml`
    pub fn with_timestamp(created: DateTime<Utc>) -> Self {
        Self { created }
    }

    fn package(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let body = document_xml::write_document(document).map_err(AuditError::report_generation)?;
        let formats: Vec<_> = document.images().map(|run| run.image.format).collect();

        let parts = [
            ("[Content_Types].xml", package_parts::content_types()),
            ("_rels/.rels", package_parts::package_relationships()),
            ("word/document.xml", Ok(body)),
            ("word/styles.xml", package_parts::styles(&document.metadata)),
            (
                "word/_rels/document.xml.rels",
                package_parts::document_relationships(&formats),
            ),
            (
                "docProps/core.xml",
                package_parts::core_properties(&document.metadata, self.created),
            ),
            ("docProps/app.xml", package_parts::app_properties()),
        ];

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        for (name, content) in parts {
            let content = content.map_err(AuditError::report_generation)?;
            zip.start_file(name, options)
                .map_err(AuditError::report_generation)?;
            zip.write_all(content.as_bytes())
                .map_err(AuditError::report_generation)?;
        }

        for (index, run) in document.images().enumerate() {
            let name = format!(
                "word/{}",
                package_parts::media_target(index + 1, run.image.format)
            );
            zip.start_file(name, options)
                .map_err(AuditError::report_generation)?;
            zip.write_all(&run.image.bytes)
                .map_err(AuditError::report_generation)?;
        }

        let cursor = zip.finish().map_err(AuditError::report_generation)?;
        tracing::debug!(
            images = formats.len(),
            bytes = cursor.get_ref().len(),
            "docx package written"
        );
        Ok(cursor.into_inner())
    }
}

impl Default for DocxSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSerializer for DocxSerializer {
    fn serialize(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        self.package(document)
    }

    fn file_extension(&self) -> &'static str {
        "docx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        Block, DocumentMetadata, HeadingLevel, ImageRun, Inline, Paragraph, Spacing, Table,
        TableCell, TableRow, TextRun,
    };
    use crate::inspection::services::{DecodedImage, ImageFormat};
    use chrono::TimeZone;
    use std::io::Read;
    use zip::ZipArchive;

    fn metadata() -> DocumentMetadata {
        DocumentMetadata {
            title: "North Field".to_string(),
            creator: "Site Inspector".to_string(),
            description: "Asset Inspection Audit".to_string(),
            font: "Calibri".to_string(),
            font_size: 22,
        }
    }

    fn photo(format: ImageFormat, bytes: &[u8]) -> Inline {
        Inline::Image(ImageRun::photo(DecodedImage {
            format,
            bytes: bytes.to_vec(),
        }))
    }

    fn sample_document() -> ReportDocument {
        let mut table = Table::new(vec![4000, 6000]);
        table.push_row(TableRow::new(vec![
            TableCell::new(TextRun::plain("Inspector")),
            TableCell::new(TextRun::plain("Jane Doe")),
        ]));

        ReportDocument {
            metadata: metadata(),
            blocks: vec![
                Block::Paragraph(Paragraph::heading(
                    HeadingLevel::Heading1,
                    "North Field (WTW)",
                    Spacing::new(0, 240),
                )),
                Block::Table(table),
                Block::Paragraph(Paragraph {
                    inlines: vec![
                        photo(ImageFormat::Png, b"\x89PNG\r\n\x1a\nfirst"),
                        Inline::Text(TextRun::plain("  ")),
                        photo(ImageFormat::Jpeg, b"\xFF\xD8\xFFsecond"),
                    ],
                    ..Paragraph::default()
                }),
            ],
        }
    }

    fn serializer() -> DocxSerializer {
        DocxSerializer::with_timestamp(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap())
    }

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
        let mut entry = archive.by_name(name).unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = serializer().serialize(&sample_document()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/_rels/document.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "word/media/image1.png",
            "word/media/image2.jpeg",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }
    }

    #[test]
    fn test_content_types_is_first_entry() {
        let bytes = serializer().serialize(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
    }

    #[test]
    fn test_media_bytes_are_stored_unchanged() {
        let bytes = serializer().serialize(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(
            read_entry(&mut archive, "word/media/image1.png"),
            b"\x89PNG\r\n\x1a\nfirst"
        );
        assert_eq!(
            read_entry(&mut archive, "word/media/image2.jpeg"),
            b"\xFF\xD8\xFFsecond"
        );
    }

    #[test]
    fn test_document_references_image_relationships() {
        let bytes = serializer().serialize(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let document = String::from_utf8(read_entry(&mut archive, "word/document.xml")).unwrap();
        assert!(document.contains(r#"r:embed="rId2""#));
        assert!(document.contains(r#"r:embed="rId3""#));
        assert!(document.contains("North Field (WTW)"));
        assert!(document.contains("Jane Doe"));

        let rels =
            String::from_utf8(read_entry(&mut archive, "word/_rels/document.xml.rels")).unwrap();
        assert!(rels.contains(r#"Target="media/image1.png""#));
        assert!(rels.contains(r#"Target="media/image2.jpeg""#));
    }

    #[test]
    fn test_core_properties_use_fixed_timestamp() {
        let bytes = serializer().serialize(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let core = String::from_utf8(read_entry(&mut archive, "docProps/core.xml")).unwrap();
        assert!(core.contains("<dc:title>North Field</dc:title>"));
        assert!(core.contains("2026-10-16T09:00:00Z"));
    }

    #[test]
    fn test_document_without_images_has_no_media() {
        let document = ReportDocument {
            metadata: metadata(),
            blocks: vec![Block::Paragraph(Paragraph::text(TextRun::plain(
                "No maintenance defects recorded.",
            )))],
        };
        let bytes = serializer().serialize(&document).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert!(archive.file_names().all(|name| !name.starts_with("word/media/")));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(DocxSerializer::new().file_extension(), "docx");
    }
}
