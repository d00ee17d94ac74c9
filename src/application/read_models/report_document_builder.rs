//! Builder for constructing a ReportDocument from a scored session
//!
//! Every string placed into the tree goes through `TextSanitizer` here, so the
//! serializers can trust the text they receive.

use super::decoded_photos::DecodedPhotos;
use super::report_document::{
    Block, DocumentMetadata, HeadingLevel, ImageRun, Inline, Paragraph, ReportDocument, Spacing,
    Table, TableCell, TableRow, TextRun, HEADER_SHADING, REPORT_FONT, REPORT_FONT_SIZE,
};
use crate::inspection::domain::{ComplianceSnapshot, InspectionSession, Observation};
use crate::inspection::policies::RiskPalette;
use crate::inspection::services::{DecodedImage, TextSanitizer};

const DOCUMENT_CREATOR: &str = "Site Inspector";
const DOCUMENT_DESCRIPTION: &str = "Asset Inspection Audit";

const TITLE_SIZE: u32 = 36;
const SUBTITLE_SIZE: u32 = 18;
const SUBTITLE_COLOR: &str = "555555";

const SUMMARY_COLUMNS: [u32; 2] = [4000, 6000];
const BREAKDOWN_COLUMNS: [u32; 4] = [4000, 2000, 2000, 2000];
const OBSERVATION_COLUMNS: [u32; 2] = [3000, 7000];

/// Separates consecutive photos in the same paragraph
const PHOTO_SEPARATOR: &str = "  ";

pub const SUMMARY_HEADING: &str = "1. Audit Summary";
pub const BREAKDOWN_HEADING: &str = "2. Compliance Breakdown by Category";
pub const MAINTENANCE_HEADING: &str = "3. Detailed Maintenance Findings";
pub const NON_MAINTENANCE_HEADING: &str = "4. Non-Maintenance Oriented Findings";
pub const NO_MAINTENANCE_DEFECTS: &str = "No maintenance defects recorded.";

/// Builder for constructing ReportDocument from domain objects
pub struct ReportDocumentBuilder;

impl ReportDocumentBuilder {
    /// Builds the report tree
    ///
    /// # Arguments
    /// * `session` - The audit session, borrowed for this call only
    /// * `snapshot` - Metrics previously computed by `ComplianceScorer` for `session`
    /// * `photos` - Decoded photos aligned to `session.observations`
    pub fn build(
        session: &InspectionSession,
        snapshot: &ComplianceSnapshot,
        photos: &DecodedPhotos,
    ) -> ReportDocument {
        let mut blocks = Vec::new();

        Self::push_title(&mut blocks, session);
        Self::push_summary(&mut blocks, session, snapshot);
        Self::push_breakdown(&mut blocks, session);

        blocks.push(Block::Paragraph(Paragraph::heading(
            HeadingLevel::Heading2,
            MAINTENANCE_HEADING,
            Spacing::new(400, 200),
        )));

        let maintenance: Vec<(usize, &Observation)> = session
            .observations
            .iter()
            .enumerate()
            .filter(|(_, o)| session.config.counts_toward_scoring(&o.category))
            .collect();
        let non_maintenance: Vec<(usize, &Observation)> = session
            .observations
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.is_maintenance())
            .collect();

        if maintenance.is_empty() {
            blocks.push(Block::Paragraph(Paragraph::text(TextRun::plain(
                NO_MAINTENANCE_DEFECTS,
            ))));
        }

        let mut number = 0;
        for (index, observation) in maintenance {
            number += 1;
            Self::push_observation(&mut blocks, number, observation, photos.for_observation(index));
        }

        if !non_maintenance.is_empty() {
            blocks.push(Block::Paragraph(Paragraph::heading(
                HeadingLevel::Heading2,
                NON_MAINTENANCE_HEADING,
                Spacing::new(600, 200),
            )));
            for (index, observation) in non_maintenance {
                number += 1;
                Self::push_observation(
                    &mut blocks,
                    number,
                    observation,
                    photos.for_observation(index),
                );
            }
        }

        ReportDocument {
            metadata: DocumentMetadata {
                title: TextSanitizer::sanitize(&session.site_name),
                creator: DOCUMENT_CREATOR.to_string(),
                description: DOCUMENT_DESCRIPTION.to_string(),
                font: REPORT_FONT.to_string(),
                font_size: REPORT_FONT_SIZE,
            },
            blocks,
        }
    }

    fn push_title(blocks: &mut Vec<Block>, session: &InspectionSession) {
        let title = format!(
            "{} ({})",
            TextSanitizer::sanitize(&session.site_name),
            session.site_type.code()
        );
        blocks.push(Block::Paragraph(Paragraph {
            heading: Some(HeadingLevel::Heading1),
            ..Paragraph::text(TextRun::bold(title).with_size(TITLE_SIZE))
                .centered()
                .with_spacing(Spacing::new(0, 240))
        }));

        let subtitle = format!(
            "MAINTENANCE COMPLIANCE AUDIT • {}",
            TextSanitizer::sanitize(&session.date)
        );
        blocks.push(Block::Paragraph(
            Paragraph::text(
                TextRun::bold(subtitle)
                    .with_size(SUBTITLE_SIZE)
                    .with_color(SUBTITLE_COLOR),
            )
            .centered()
            .with_spacing(Spacing::new(0, 480)),
        ));
    }

    fn push_summary(
        blocks: &mut Vec<Block>,
        session: &InspectionSession,
        snapshot: &ComplianceSnapshot,
    ) {
        blocks.push(Block::Paragraph(Paragraph::heading(
            HeadingLevel::Heading2,
            SUMMARY_HEADING,
            Spacing::new(0, 200),
        )));

        let non_maintenance_defects: u64 = session
            .non_maintenance_observations()
            .map(|o| u64::from(o.non_compliance_count))
            .sum();

        let mut table = Table::new(SUMMARY_COLUMNS.to_vec());
        let rows = [
            ("Inspector", TextSanitizer::sanitize(&session.inspector)),
            ("Site Reference", TextSanitizer::sanitize(&session.site_name)),
            ("Facility Type", session.site_type.code().to_string()),
            ("Audit Date", TextSanitizer::sanitize(&session.date)),
            (
                "Total Assets Checked",
                TextSanitizer::sanitize_display(snapshot.total_assets_checked),
            ),
            (
                "Total Maintenance Defects Found",
                TextSanitizer::sanitize_display(snapshot.maintenance_defect_total),
            ),
            (
                "Total Non-Maintenance Defects Found",
                TextSanitizer::sanitize_display(non_maintenance_defects),
            ),
            (
                "Mechanical SIS (Depth)",
                TextSanitizer::sanitize(&snapshot.site_issue_score),
            ),
            (
                "Compliance (Breadth)",
                format!("{}%", snapshot.compliance_percentage),
            ),
        ];
        for (label, value) in rows {
            table.push_row(Self::key_value_row(label, TextRun::plain(value)));
        }
        blocks.push(Block::Table(table));
    }

    fn push_breakdown(blocks: &mut Vec<Block>, session: &InspectionSession) {
        blocks.push(Block::Paragraph(Paragraph::heading(
            HeadingLevel::Heading2,
            BREAKDOWN_HEADING,
            Spacing::new(400, 200),
        )));

        let mut table = Table::new(BREAKDOWN_COLUMNS.to_vec());
        table.push_row(TableRow::header(
            ["Category", "Compliant", "Non-Compliant", "Total Inspected"]
                .into_iter()
                .map(|label| TableCell::new(TextRun::bold(label)).shaded(HEADER_SHADING))
                .collect(),
        ));

        for category in &session.config.categories {
            let pass = session.tally_for(category);
            let fail = session
                .observations
                .iter()
                .filter(|o| o.category.asset_category() == Some(category))
                .count() as u64;

            table.push_row(TableRow::new(vec![
                TableCell::new(TextRun::plain(TextSanitizer::sanitize(category.as_str()))),
                TableCell::new(TextRun::plain(TextSanitizer::sanitize_display(pass))),
                TableCell::new(TextRun::plain(TextSanitizer::sanitize_display(fail))),
                TableCell::new(TextRun::plain(TextSanitizer::sanitize_display(pass.saturating_add(fail)))),
            ]));
        }
        blocks.push(Block::Table(table));
    }

    fn push_observation(
        blocks: &mut Vec<Block>,
        number: usize,
        observation: &Observation,
        photos: &[DecodedImage],
    ) {
        blocks.push(Block::Paragraph(Paragraph::heading(
            HeadingLevel::Heading3,
            format!(
                "Observation #{}: {}",
                number,
                TextSanitizer::sanitize(observation.category.name())
            ),
            Spacing::new(300, 150),
        )));

        let risk = TextRun::bold(RiskPalette::label(observation.risk))
            .with_color(RiskPalette::color(observation.risk));
        let previously_seen = if observation.previously_seen { "Yes" } else { "No" };

        let mut table = Table::new(OBSERVATION_COLUMNS.to_vec());
        let text_row = |label: &str, value: String| Self::key_value_row(label, TextRun::plain(value));
        table.push_row(text_row(
            "Asset Name / Description",
            TextSanitizer::sanitize(&observation.asset_name),
        ));
        table.push_row(text_row(
            "Asset ID / Barcode",
            TextSanitizer::sanitize_optional(observation.asset_id.as_deref()),
        ));
        table.push_row(Self::key_value_row("Risk Level", risk));
        table.push_row(text_row(
            "Defect Count",
            TextSanitizer::sanitize_display(observation.non_compliance_count),
        ));
        table.push_row(text_row("Previously Seen", previously_seen.to_string()));
        table.push_row(text_row(
            "Findings",
            TextSanitizer::sanitize(&observation.findings),
        ));
        table.push_row(text_row(
            "Short Term Fix",
            TextSanitizer::sanitize(&observation.short_term_fix),
        ));
        table.push_row(text_row(
            "Long Term Fix",
            TextSanitizer::sanitize(&observation.long_term_fix),
        ));
        table.push_row(text_row(
            "Action Owner",
            TextSanitizer::sanitize(&observation.action_owner),
        ));
        blocks.push(Block::Table(table));

        if photos.is_empty() {
            return;
        }

        let mut inlines = Vec::with_capacity(photos.len() * 2);
        for image in photos {
            inlines.push(Inline::Image(ImageRun::photo(image.clone())));
            inlines.push(Inline::Text(TextRun::plain(PHOTO_SEPARATOR)));
        }
        blocks.push(Block::Paragraph(Paragraph {
            spacing: Spacing::new(200, 400),
            inlines,
            ..Paragraph::default()
        }));
    }

    fn key_value_row(label: &str, value: TextRun) -> TableRow {
        TableRow::new(vec![
            TableCell::new(TextRun::bold(label)),
            TableCell::new(value),
        ])
    }
}
