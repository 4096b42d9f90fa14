//! Error types and handling for plugin-detect
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`project`]: Project model errors
//! - [`state`]: Persisted state errors
//!
//! The resolver never lets these escape: it records them and degrades to a
//! "do nothing" decision. They only reach the user from the CLI layer.

pub mod fs;
pub mod project;
pub mod state;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plugin-detect operations
#[derive(Error, Diagnostic, Debug)]
pub enum DetectError {
    // Solution errors
    #[error("Solution file not found: {path}")]
    #[diagnostic(
        code(plugin_detect::solution::not_found),
        help("Pass the path of the .sln file generated by Unity")
    )]
    SolutionNotFound { path: String },

    // Project errors
    #[error("Failed to read project file: {path}")]
    #[diagnostic(code(plugin_detect::project::read_failed))]
    ProjectReadFailed { path: String, reason: String },

    #[error("Project file has no parent directory: {path}")]
    #[diagnostic(code(plugin_detect::project::no_parent))]
    ProjectWithoutDirectory { path: String },

    // State errors
    #[error("Failed to parse state file: {path}")]
    #[diagnostic(
        code(plugin_detect::state::parse_failed),
        help("Delete the state file to start over with a first-run detection")
    )]
    StateParseFailed { path: String, reason: String },

    #[error("Failed to write state file: {path}")]
    #[diagnostic(code(plugin_detect::state::write_failed))]
    StateWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(plugin_detect::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to list directory: {path}")]
    #[diagnostic(code(plugin_detect::fs::list_failed))]
    DirectoryListFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(plugin_detect::fs::io_error))]
    IoError { message: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(plugin_detect::output::serialize_failed))]
    SerializeFailed { message: String },
}

impl From<std::io::Error> for DetectError {
    fn from(err: std::io::Error) -> Self {
        DetectError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DetectError {
    fn from(err: serde_yaml::Error) -> Self {
        DetectError::StateParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(err: serde_json::Error) -> Self {
        DetectError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DetectError>;
