//! Format-neutral report document tree
//!
//! The builder produces this tree from a scored session; serializers only walk it.
//! All text in the tree has already been sanitized.

use crate::inspection::services::DecodedImage;

/// Body font of every report
pub const REPORT_FONT: &str = "Calibri";

/// Default body size in half-points (11pt)
pub const REPORT_FONT_SIZE: u32 = 22;

/// Fill colour of shaded header cells
pub const HEADER_SHADING: &str = "F2F2F2";

/// Displayed width of an embedded photo, in pixels
pub const PHOTO_WIDTH_PX: u32 = 220;

/// Displayed height of an embedded photo, in pixels
pub const PHOTO_HEIGHT_PX: u32 = 165;

/// Main read model for a generated report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub metadata: DocumentMetadata,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    /// Texts of every heading paragraph, in document order
    pub fn headings(&self) -> Vec<(HeadingLevel, String)> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => p.heading.map(|level| (level, p.plain_text())),
                Block::Table(_) => None,
            })
            .collect()
    }

    /// Every embedded image, in document order
    pub fn images(&self) -> impl Iterator<Item = &ImageRun> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.inlines.iter()),
                Block::Table(_) => None,
            })
            .flatten()
            .filter_map(|inline| match inline {
                Inline::Image(image) => Some(image),
                Inline::Text(_) => None,
            })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }
}

/// Package-level properties of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub creator: String,
    pub description: String,
    pub font: String,
    /// Half-points
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
}

impl HeadingLevel {
    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::Heading1 => 1,
            HeadingLevel::Heading2 => 2,
            HeadingLevel::Heading3 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Paragraph spacing in twentieths of a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }

    pub fn is_empty(&self) -> bool {
        self.before == 0 && self.after == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub heading: Option<HeadingLevel>,
    pub alignment: Alignment,
    pub spacing: Spacing,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn heading(level: HeadingLevel, text: impl Into<String>, spacing: Spacing) -> Self {
        Self {
            heading: Some(level),
            alignment: Alignment::Left,
            spacing,
            inlines: vec![Inline::Text(TextRun::plain(text))],
        }
    }

    pub fn text(run: TextRun) -> Self {
        Self {
            inlines: vec![Inline::Text(run)],
            ..Self::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Concatenated text of the paragraph's text runs
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Text(run) => Some(run.text.as_str()),
                Inline::Image(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(TextRun),
    Image(ImageRun),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    /// Half-points; `None` inherits the document default
    pub size: Option<u32>,
    /// Hex RGB without `#`
    pub color: Option<String>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// An inline photo with a fixed display size in pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRun {
    pub image: DecodedImage,
    pub width: u32,
    pub height: u32,
}

impl ImageRun {
    pub fn photo(image: DecodedImage) -> Self {
        Self {
            image,
            width: PHOTO_WIDTH_PX,
            height: PHOTO_HEIGHT_PX,
        }
    }
}

/// Fixed-layout, full-width table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Grid column widths in twentieths of a point
    pub column_widths: Vec<u32>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(column_widths: Vec<u32>) -> Self {
        Self {
            column_widths,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Finds the value cell of a two-column key/value row by its label
    pub fn value_for(&self, label: &str) -> Option<&TableCell> {
        self.rows
            .iter()
            .find(|row| row.cells.first().is_some_and(|cell| cell.text() == label))
            .and_then(|row| row.cells.get(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            is_header: false,
            cells,
        }
    }

    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            is_header: true,
            cells,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub runs: Vec<TextRun>,
    /// Fill colour, hex RGB without `#`
    pub shading: Option<String>,
}

impl TableCell {
    pub fn new(run: TextRun) -> Self {
        Self {
            runs: vec![run],
            shading: None,
        }
    }

    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}
