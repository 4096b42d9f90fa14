//! Persisted state errors

use std::path::Path;

use super::DetectError;

/// Creates a state parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> DetectError {
    DetectError::StateParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a state write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> DetectError {
    DetectError::StateWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
