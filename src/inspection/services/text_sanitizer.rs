use std::fmt::Display;

/// TextSanitizer service stripping code points that are illegal in XML 1.0 content
///
/// Word, Teams and most other OOXML consumers refuse (or "repair") a document whose
/// text contains control characters, so every string placed into a document node
/// goes through here first.
pub struct TextSanitizer;

impl TextSanitizer {
    /// True for the XML 1.0 `Char` production: tab, CR, LF and the printable planes
    pub fn is_permitted(c: char) -> bool {
        matches!(
            c,
            '\t' | '\n' | '\r'
                | '\u{20}'..='\u{D7FF}'
                | '\u{E000}'..='\u{FFFD}'
                | '\u{10000}'..='\u{10FFFF}'
        )
    }

    /// Removes every character outside the permitted set. Idempotent.
    pub fn sanitize(text: &str) -> String {
        text.chars().filter(|&c| Self::is_permitted(c)).collect()
    }

    /// Absent text sanitizes to the empty string
    pub fn sanitize_optional(text: Option<&str>) -> String {
        text.map(Self::sanitize).unwrap_or_default()
    }

    /// Sanitizes the display form of a number or other value
    pub fn sanitize_display(value: impl Display) -> String {
        Self::sanitize(&value.to_string())
    }
}
