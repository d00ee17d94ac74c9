//! `word/document.xml` writer

use crate::application::read_models::{
    Alignment, Block, HeadingLevel, ImageRun, Inline, Paragraph, ReportDocument, Table, TextRun,
};
use crate::shared::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Result as XmlResult, Writer};

/// EMU per CSS pixel at 96 dpi
const EMU_PER_PIXEL: u64 = 9525;

/// A4 portrait, in twentieths of a point
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: u32 = 1440;

/// Usable width between the margins
pub(super) const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

const NAMESPACES: [(&str, &str); 5] = [
    (
        "xmlns:w",
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    ),
    (
        "xmlns:r",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    ),
    (
        "xmlns:wp",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing",
    ),
    ("xmlns:a", "http://schemas.openxmlformats.org/drawingml/2006/main"),
    (
        "xmlns:pic",
        "http://schemas.openxmlformats.org/drawingml/2006/picture",
    ),
];

const PICTURE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

const TABLE_EDGES: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

/// Relationship id of the n-th embedded image (1-based); `rId1` is the styles part
pub(super) fn image_relationship_id(number: usize) -> String {
    format!("rId{}", number + 1)
}

pub(super) fn pixels_to_emu(pixels: u32) -> u64 {
    u64::from(pixels) * EMU_PER_PIXEL
}

/// Scales a table's relative grid to the text width, keeping the ratios
pub(super) fn scale_columns(widths: &[u32]) -> Vec<u32> {
    let total: u64 = widths.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return widths.to_vec();
    }
    widths
        .iter()
        .map(|&w| (u64::from(w) * u64::from(TEXT_WIDTH) / total) as u32)
        .collect()
}

/// Serializes the document body. Images are numbered in document order.
pub(super) fn write_document(document: &ReportDocument) -> Result<String> {
    let mut writer = BodyWriter {
        xml: Writer::new(Vec::new()),
        images_written: 0,
    };
    writer.write(document)?;
    Ok(String::from_utf8(writer.xml.into_inner())?)
}

/// Event-level writer; every element opened here is closed by the same method
struct BodyWriter {
    xml: Writer<Vec<u8>>,
    images_written: usize,
}

impl BodyWriter {
    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.xml.write_event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> XmlResult<()> {
        self.xml.write_event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.xml.write_event(Event::Empty(element))
    }

    fn write(&mut self, document: &ReportDocument) -> XmlResult<()> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        self.start("w:document", &NAMESPACES)?;
        self.start("w:body", &[])?;

        for (index, block) in document.blocks.iter().enumerate() {
            match block {
                Block::Paragraph(paragraph) => self.paragraph(paragraph)?,
                Block::Table(table) => {
                    self.table(table)?;
                    // Adjacent tables merge, and the body may not end on a table
                    if !matches!(document.blocks.get(index + 1), Some(Block::Paragraph(_))) {
                        self.empty("w:p", &[])?;
                    }
                }
            }
        }

        self.section_properties()?;
        self.end("w:body")?;
        self.end("w:document")
    }

    fn section_properties(&mut self) -> XmlResult<()> {
        let (width, height, margin) = (
            PAGE_WIDTH.to_string(),
            PAGE_HEIGHT.to_string(),
            PAGE_MARGIN.to_string(),
        );
        self.start("w:sectPr", &[])?;
        self.empty("w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", margin.as_str()),
                ("w:right", margin.as_str()),
                ("w:bottom", margin.as_str()),
                ("w:left", margin.as_str()),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }

    fn paragraph(&mut self, paragraph: &Paragraph) -> XmlResult<()> {
        self.start("w:p", &[])?;
        self.paragraph_properties(paragraph)?;
        for inline in &paragraph.inlines {
            match inline {
                Inline::Text(run) => self.text_run(run)?,
                Inline::Image(image) => self.image_run(image)?,
            }
        }
        self.end("w:p")
    }

    fn paragraph_properties(&mut self, paragraph: &Paragraph) -> XmlResult<()> {
        let centered = paragraph.alignment == Alignment::Center;
        if paragraph.heading.is_none() && paragraph.spacing.is_empty() && !centered {
            return Ok(());
        }

        self.start("w:pPr", &[])?;
        if let Some(level) = paragraph.heading {
            self.empty("w:pStyle", &[("w:val", style_id(level))])?;
        }
        if !paragraph.spacing.is_empty() {
            let before = paragraph.spacing.before.to_string();
            let after = paragraph.spacing.after.to_string();
            self.empty("w:spacing", &[("w:before", before.as_str()), ("w:after", after.as_str())])?;
        }
        if centered {
            self.empty("w:jc", &[("w:val", "center")])?;
        }
        self.end("w:pPr")
    }

    fn text_run(&mut self, run: &TextRun) -> XmlResult<()> {
        self.start("w:r", &[])?;
        if run.bold || run.color.is_some() || run.size.is_some() {
            self.start("w:rPr", &[])?;
            if run.bold {
                self.empty("w:b", &[])?;
                self.empty("w:bCs", &[])?;
            }
            if let Some(color) = &run.color {
                self.empty("w:color", &[("w:val", color.as_str())])?;
            }
            if let Some(size) = run.size {
                let size = size.to_string();
                self.empty("w:sz", &[("w:val", size.as_str())])?;
                self.empty("w:szCs", &[("w:val", size.as_str())])?;
            }
            self.end("w:rPr")?;
        }
        self.text_content(&run.text)?;
        self.end("w:r")
    }

    /// Tabs and line breaks become `<w:tab/>` and `<w:br/>`; a bare `\r` is dropped
    fn text_content(&mut self, text: &str) -> XmlResult<()> {
        let mut segment = String::new();
        if text.is_empty() {
            return self.flush_segment(&mut segment, true);
        }
        for c in text.chars() {
            match c {
                '\t' | '\n' => {
                    self.flush_segment(&mut segment, false)?;
                    self.empty(if c == '\t' { "w:tab" } else { "w:br" }, &[])?;
                }
                '\r' => {}
                other => segment.push(other),
            }
        }
        self.flush_segment(&mut segment, false)
    }

    fn flush_segment(&mut self, segment: &mut String, keep_empty: bool) -> XmlResult<()> {
        if segment.is_empty() && !keep_empty {
            return Ok(());
        }
        self.start("w:t", &[("xml:space", "preserve")])?;
        self.xml.write_event(Event::Text(BytesText::new(segment.as_str())))?;
        self.end("w:t")?;
        segment.clear();
        Ok(())
    }

    fn image_run(&mut self, image: &ImageRun) -> XmlResult<()> {
        self.images_written += 1;
        let number = self.images_written.to_string();
        let cx = pixels_to_emu(image.width).to_string();
        let cy = pixels_to_emu(image.height).to_string();
        let picture_name = format!("Picture {}", number);
        let file_name = format!("image{}.{}", number, image.image.format.extension());
        let relationship = image_relationship_id(self.images_written);

        self.start("w:r", &[])?;
        self.start("w:drawing", &[])?;
        self.start(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        self.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        self.empty(
            "wp:effectExtent",
            &[("l", "0"), ("t", "0"), ("r", "0"), ("b", "0")],
        )?;
        self.empty("wp:docPr", &[("id", number.as_str()), ("name", picture_name.as_str())])?;
        self.start("wp:cNvGraphicFramePr", &[])?;
        self.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
        self.end("wp:cNvGraphicFramePr")?;

        self.start("a:graphic", &[])?;
        self.start("a:graphicData", &[("uri", PICTURE_URI)])?;
        self.start("pic:pic", &[])?;

        self.start("pic:nvPicPr", &[])?;
        self.empty("pic:cNvPr", &[("id", number.as_str()), ("name", file_name.as_str())])?;
        self.empty("pic:cNvPicPr", &[])?;
        self.end("pic:nvPicPr")?;

        self.start("pic:blipFill", &[])?;
        self.empty("a:blip", &[("r:embed", relationship.as_str())])?;
        self.start("a:stretch", &[])?;
        self.empty("a:fillRect", &[])?;
        self.end("a:stretch")?;
        self.end("pic:blipFill")?;

        self.start("pic:spPr", &[])?;
        self.start("a:xfrm", &[])?;
        self.empty("a:off", &[("x", "0"), ("y", "0")])?;
        self.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        self.end("a:xfrm")?;
        self.start("a:prstGeom", &[("prst", "rect")])?;
        self.empty("a:avLst", &[])?;
        self.end("a:prstGeom")?;
        self.end("pic:spPr")?;

        self.end("pic:pic")?;
        self.end("a:graphicData")?;
        self.end("a:graphic")?;
        self.end("wp:inline")?;
        self.end("w:drawing")?;
        self.end("w:r")
    }

    fn table(&mut self, table: &Table) -> XmlResult<()> {
        let columns = scale_columns(&table.column_widths);

        self.start("w:tbl", &[])?;
        self.start("w:tblPr", &[])?;
        self.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        self.start("w:tblBorders", &[])?;
        for edge in TABLE_EDGES {
            self.empty(
                &format!("w:{}", edge),
                &[
                    ("w:val", "single"),
                    ("w:sz", "4"),
                    ("w:space", "0"),
                    ("w:color", "auto"),
                ],
            )?;
        }
        self.end("w:tblBorders")?;
        self.empty("w:tblLayout", &[("w:type", "fixed")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid", &[])?;
        for width in &columns {
            let width = width.to_string();
            self.empty("w:gridCol", &[("w:w", width.as_str())])?;
        }
        self.end("w:tblGrid")?;

        for row in &table.rows {
            self.start("w:tr", &[])?;
            if row.is_header {
                self.start("w:trPr", &[])?;
                self.empty("w:tblHeader", &[])?;
                self.end("w:trPr")?;
            }
            for (index, cell) in row.cells.iter().enumerate() {
                let width = columns.get(index).copied().unwrap_or(0).to_string();
                self.start("w:tc", &[])?;
                self.start("w:tcPr", &[])?;
                self.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "dxa")])?;
                if let Some(fill) = &cell.shading {
                    self.empty(
                        "w:shd",
                        &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill.as_str())],
                    )?;
                }
                self.end("w:tcPr")?;
                self.start("w:p", &[])?;
                for run in &cell.runs {
                    self.text_run(run)?;
                }
                self.end("w:p")?;
                self.end("w:tc")?;
            }
            self.end("w:tr")?;
        }
        self.end("w:tbl")
    }
}

pub(super) fn style_id(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::Heading1 => "Heading1",
        HeadingLevel::Heading2 => "Heading2",
        HeadingLevel::Heading3 => "Heading3",
    }
}
