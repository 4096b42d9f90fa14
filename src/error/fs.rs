//! File system errors

use std::path::Path;

use super::DetectError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> DetectError {
    DetectError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory listing failed error
pub fn list_failed(path: &Path, reason: impl ToString) -> DetectError {
    DetectError::DirectoryListFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

