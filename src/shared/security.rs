use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum session file size (256 MB).
///
/// Sessions carry their photos inline as base64, so this is far above the size of a
/// plain JSON document but still bounds memory use on a hostile input.
pub const MAX_SESSION_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Rejects `path` when it is itself a symbolic link.
///
/// The link is inspected with `symlink_metadata()`; its target is never followed.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AuditError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Requires an existing, non-symlinked regular file at `path`.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| AuditError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if !metadata.is_file() {
        return Err(AuditError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(())
}

/// Rejects files larger than `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Compress the session photos before exporting".to_string(),
        }
        .into());
    }
    Ok(())
}
