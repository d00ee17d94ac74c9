//! Fixed package parts: content types, relationships, styles and properties

use super::document_xml::{image_relationship_id, style_id};
use crate::application::read_models::{DocumentMetadata, HeadingLevel};
use crate::inspection::services::ImageFormat;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use std::fmt::{self, Write};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const OFFICE_RELATIONSHIP_TYPES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Application name written to `docProps/app.xml`
const APPLICATION_NAME: &str = "Site Inspector";

pub(super) fn content_types() -> Result<String, fmt::Error> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for format in ImageFormat::all() {
        write!(
            xml,
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            format.extension(),
            format.content_type()
        )?;
    }
    for (part, content_type) in [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ] {
        write!(
            xml,
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            part, content_type
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

pub(super) fn package_relationships() -> Result<String, fmt::Error> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    write!(xml, r#"<Relationships xmlns="{}">"#, PACKAGE_RELATIONSHIPS_NS)?;
    write!(
        xml,
        r#"<Relationship Id="rId1" Type="{}/officeDocument" Target="word/document.xml"/>"#,
        OFFICE_RELATIONSHIP_TYPES
    )?;
    write!(
        xml,
        r#"<Relationship Id="rId2" Type="{}/metadata/core-properties" Target="docProps/core.xml"/>"#,
        PACKAGE_RELATIONSHIPS_NS
    )?;
    write!(
        xml,
        r#"<Relationship Id="rId3" Type="{}/extended-properties" Target="docProps/app.xml"/>"#,
        OFFICE_RELATIONSHIP_TYPES
    )?;
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `word/_rels/document.xml.rels`; images are `media/image{n}.{ext}` in document order
pub(super) fn document_relationships(images: &[ImageFormat]) -> Result<String, fmt::Error> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    write!(xml, r#"<Relationships xmlns="{}">"#, PACKAGE_RELATIONSHIPS_NS)?;
    write!(
        xml,
        r#"<Relationship Id="rId1" Type="{}/styles" Target="styles.xml"/>"#,
        OFFICE_RELATIONSHIP_TYPES
    )?;
    for (index, format) in images.iter().enumerate() {
        let number = index + 1;
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}/image" Target="{}"/>"#,
            image_relationship_id(number),
            OFFICE_RELATIONSHIP_TYPES,
            media_target(number, *format)
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Path of an image relative to `word/`
pub(super) fn media_target(number: usize, format: ImageFormat) -> String {
    format!("media/image{}.{}", number, format.extension())
}

pub(super) fn styles(metadata: &DocumentMetadata) -> Result<String, fmt::Error> {
    let font = escape(metadata.font.as_str());
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    write!(
        xml,
        concat!(
            "<w:docDefaults><w:rPrDefault><w:rPr>",
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/>"#,
            r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/><w:lang w:val="en-GB"/>"#,
            "</w:rPr></w:rPrDefault>",
            r#"<w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#,
            "</w:docDefaults>"
        ),
        font = font,
        size = metadata.font_size
    )?;
    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
        r#"<w:name w:val="Normal"/><w:qFormat/></w:style>"#
    ));

    for (level, size, color) in [
        (HeadingLevel::Heading1, 32, "1F3864"),
        (HeadingLevel::Heading2, 26, "2F5496"),
        (HeadingLevel::Heading3, 24, "1F3763"),
    ] {
        write!(
            xml,
            concat!(
                r#"<w:style w:type="paragraph" w:styleId="{id}">"#,
                r#"<w:name w:val="heading {n}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
                r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="{outline}"/></w:pPr>"#,
                r#"<w:rPr><w:b/><w:bCs/><w:color w:val="{color}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr>"#,
                "</w:style>"
            ),
            id = style_id(level),
            n = level.level(),
            outline = level.level() - 1,
            color = color,
            size = size
        )?;
    }

    xml.push_str(concat!(
        r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#,
        r#"<w:name w:val="Normal Table"/><w:uiPriority w:val="99"/><w:semiHidden/><w:unhideWhenUsed/>"#,
        r#"<w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar>"#,
        r#"<w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/>"#,
        r#"<w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/>"#,
        "</w:tblCellMar></w:tblPr></w:style>",
        r#"<w:style w:type="table" w:styleId="TableGrid">"#,
        r#"<w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:uiPriority w:val="39"/>"#,
        r#"<w:tblPr><w:tblBorders>"#,
        r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        "</w:tblBorders></w:tblPr></w:style>",
        "</w:styles>"
    ));
    Ok(xml)
}

pub(super) fn core_properties(
    metadata: &DocumentMetadata,
    created: DateTime<Utc>,
) -> Result<String, fmt::Error> {
    let timestamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    write!(
        xml,
        concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title>",
            "<dc:creator>{creator}</dc:creator>",
            "<dc:description>{description}</dc:description>",
            "<cp:lastModifiedBy>{creator}</cp:lastModifiedBy>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        title = escape(metadata.title.as_str()),
        creator = escape(metadata.creator.as_str()),
        description = escape(metadata.description.as_str()),
        timestamp = timestamp
    )?;
    Ok(xml)
}

pub(super) fn app_properties() -> Result<String, fmt::Error> {
    let mut xml = String::new();
    writeln!(xml, "{}", XML_DECLARATION)?;
    write!(
        xml,
        concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{}</Application><DocSecurity>0</DocSecurity>",
            "</Properties>"
        ),
        APPLICATION_NAME
    )?;
    Ok(xml)
}
