mod alert_evaluator;
mod compliance_scorer;
mod image_payload;
mod report_file_name;
mod text_sanitizer;

pub use alert_evaluator::{AlertEvaluator, AlertFlags};
pub use compliance_scorer::ComplianceScorer;
pub use image_payload::{DecodedImage, ImageFormat, ImagePayloadDecoder};
pub use report_file_name::ReportFileName;
pub use text_sanitizer::TextSanitizer;
