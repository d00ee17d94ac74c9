use crate::inspection::domain::InspectionSession;
use crate::ports::outbound::SessionReader;
use crate::shared::error::AuditError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_SESSION_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// JsonSessionReader adapter for exported session files
///
/// Reads the JSON the capture app writes, with the same security checks the rest
/// of the filesystem adapters apply, then validates the session.
pub struct JsonSessionReader;

impl JsonSessionReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses and validates a session document held in memory
    pub fn parse(&self, content: &str, path: &Path) -> Result<InspectionSession> {
        let session: InspectionSession =
            serde_json::from_str(content).map_err(|e| AuditError::SessionParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        session.validate()?;
        tracing::debug!(
            path = %path.display(),
            observations = session.observations.len(),
            "session parsed"
        );
        Ok(session)
    }

    /// Safely read a file: no symlinks, regular files only, bounded size
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "Session file")?;

        let metadata = fs::metadata(path).map_err(|e| AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_SESSION_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            AuditError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for JsonSessionReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReader for JsonSessionReader {
    fn read_session(&self, path: &Path) -> Result<InspectionSession> {
        if !path.exists() {
            return Err(AuditError::SessionNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the inspection session from the app as JSON, \
                             or specify the correct path with the --session option."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        self.parse(&content, path)
    }
}
