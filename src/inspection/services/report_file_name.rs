use super::TextSanitizer;
use chrono::NaiveDateTime;

/// Used when the site name has no usable characters
const FALLBACK_SITE_NAME: &str = "Site";

/// ReportFileName service for the suggested download name of a report
pub struct ReportFileName;

impl ReportFileName {
    /// `{site name, whitespace runs collapsed to "_"}_{timestamp}_Report.{extension}`
    ///
    /// Path separators and other characters that are invalid in Windows file names
    /// are replaced with `-` so the name never escapes the output directory.
    pub fn suggest(site_name: &str, timestamp: NaiveDateTime, extension: &str) -> String {
        let cleaned: String = TextSanitizer::sanitize(site_name)
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                other => other,
            })
            .collect();

        let mut site = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
        if site.trim_matches(|c| c == '-' || c == '.').is_empty() {
            site = FALLBACK_SITE_NAME.to_string();
        }

        format!(
            "{}_{}_Report.{}",
            site,
            timestamp.format("%Y-%m-%d_%H%M%S"),
            extension
        )
    }
}
