use crate::application::read_models::{
    Block, Inline, Paragraph, ReportDocument, Table, TableCell, TextRun,
};
use crate::ports::outbound::ReportSerializer;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MarkdownSerializer adapter rendering a report as GitHub-flavored Markdown
///
/// Photos are inlined as `data:` URIs so the output stays a single file.
pub struct MarkdownSerializer;

impl MarkdownSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and folds every line ending (CRLF, CR, LF) into a space
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_run(run: &TextRun) -> String {
        if run.bold && !run.text.trim().is_empty() {
            format!("**{}**", run.text.trim())
        } else {
            run.text.clone()
        }
    }

    fn render_paragraph(output: &mut String, paragraph: &Paragraph) {
        if let Some(level) = paragraph.heading {
            output.push_str(&"#".repeat(level.level() as usize));
            output.push(' ');
            output.push_str(paragraph.plain_text().trim());
            output.push_str("\n\n");
            return;
        }

        let mut line = String::new();
        for inline in &paragraph.inlines {
            match inline {
                Inline::Text(run) => line.push_str(&Self::render_run(run)),
                Inline::Image(image) => {
                    line.push_str(&format!(
                        "![Photo](data:{};base64,{})",
                        image.image.format.content_type(),
                        STANDARD.encode(&image.image.bytes)
                    ));
                }
            }
        }

        let line = line.trim();
        if !line.is_empty() {
            output.push_str(line);
            output.push_str("\n\n");
        }
    }

    fn render_cell(cell: &TableCell) -> String {
        let text: String = cell.runs.iter().map(Self::render_run).collect();
        Self::escape_markdown_table_cell(&text)
    }

    fn render_table(output: &mut String, table: &Table) {
        let columns = table
            .rows
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(table.column_widths.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return;
        }

        // GFM tables need a header row; key/value tables get an empty one
        let header_row = table.rows.first().filter(|row| row.is_header);
        let header: Vec<String> = header_row
            .map(|row| row.cells.iter().map(Self::render_cell).collect())
            .unwrap_or_default();
        let body = &table.rows[usize::from(header_row.is_some())..];

        Self::push_row(output, &header, columns);
        output.push('|');
        for _ in 0..columns {
            output.push_str("---|");
        }
        output.push('\n');

        for row in body {
            let cells: Vec<String> = row.cells.iter().map(Self::render_cell).collect();
            Self::push_row(output, &cells, columns);
        }
        output.push('\n');
    }

    fn push_row(output: &mut String, cells: &[String], columns: usize) {
        output.push('|');
        for index in 0..columns {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            output.push(' ');
            output.push_str(cell);
            output.push_str(" |");
        }
        output.push('\n');
    }
}

impl Default for MarkdownSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSerializer for MarkdownSerializer {
    fn serialize(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let mut output = String::new();
        for block in &document.blocks {
            match block {
                Block::Paragraph(paragraph) => Self::render_paragraph(&mut output, paragraph),
                Block::Table(table) => Self::render_table(&mut output, table),
            }
        }
        Ok(output.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
