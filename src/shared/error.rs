use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a clean run from one whose audit breached
/// the configured alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced, no thresholds breached (or `--fail-on-alert` not given)
    Success = 0,
    /// SIS or compliance alert raised while `--fail-on-alert` was set
    AlertThresholdBreached = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable session, report generation failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AlertThresholdBreached => write!(f, "Alert Threshold Breached (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inspection scoring and report generation.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Session file not found: {path}\n\n💡 Hint: {suggestion}")]
    SessionNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse session file: {path}\nDetails: {details}\n\n💡 Hint: The session must be the JSON export of an inspection (userName, siteName, observations, ...)")]
    SessionParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Input rejected before it reaches the scoring engine
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// The document tree could not be packaged. No partial output is ever returned.
    #[error("Report generation failed: {details}\n\n💡 Hint: The session data was scored successfully; retry the export")]
    ReportGenerationFailed { details: String },

    #[error("Failed to publish metrics to {endpoint}\nDetails: {details}\n\n💡 Hint: Check the webhook URL and your network connection")]
    PublishFailed { endpoint: String, details: String },
}

impl AuditError {
    /// Wraps any packaging failure in the single report-generation error
    pub fn report_generation(err: impl fmt::Display) -> Self {
        AuditError::ReportGenerationFailed {
            details: err.to_string(),
        }
    }
}
