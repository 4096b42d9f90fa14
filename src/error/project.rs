//! Project model errors

use std::path::Path;

use super::DetectError;

/// Creates a project read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> DetectError {
    DetectError::ProjectReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a project path that has no parent directory
pub fn without_directory(path: &Path) -> DetectError {
    DetectError::ProjectWithoutDirectory {
        path: path.display().to_string(),
    }
}

/// Creates a solution not found error
pub fn solution_not_found(path: &Path) -> DetectError {
    DetectError::SolutionNotFound {
        path: path.display().to_string(),
    }
}
