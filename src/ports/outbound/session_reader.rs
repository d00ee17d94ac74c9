use crate::inspection::domain::InspectionSession;
use crate::shared::Result;
use std::path::Path;

/// SessionReader port for loading an exported inspection session
///
/// Implementations must hand back a session that has already passed
/// `InspectionSession::validate`, so the scoring engine never sees invalid input.
pub trait SessionReader {
    /// Reads, parses and validates a session
    ///
    /// # Errors
    /// Returns an error if:
    /// - The session file does not exist or cannot be read
    /// - The content is not a valid session document
    /// - The session fails validation (missing asset names, too many photos, ...)
    fn read_session(&self, path: &Path) -> Result<InspectionSession>;
}
