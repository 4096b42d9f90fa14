//! Detection outcomes
//!
//! [`Resolution`] says what was found and why; [`InstallationDecision`] is the
//! flat value consumed by the installer and by whoever persists the install
//! directory for the next run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::version::PluginVersion;

/// Why detection gave up before looking for plugin files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The solution file has no containing directory
    NoSolutionDirectory,
    /// No `Assets` directory beside the solution, so not a Unity project
    NoAssetsDirectory,
    /// An unexpected failure (I/O or similar) was recorded and swallowed
    InternalError,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSolutionDirectory => write!(f, "solution has no directory"),
            SkipReason::NoAssetsDirectory => {
                write!(f, "no Assets directory beside the solution")
            }
            SkipReason::InternalError => write!(f, "detection failed, see log"),
        }
    }
}

/// Which found-file layout was not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    MultipleDirectories,
    NoParentDirectory,
    UnsupportedFileCount(usize),
    UnexpectedSingleFile,
    UnexpectedFilePair,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::MultipleDirectories => {
                write!(f, "plugin files detected in more than one directory")
            }
            AnomalyKind::NoParentDirectory => {
                write!(f, "plugin files do not have a parent directory")
            }
            AnomalyKind::UnsupportedFileCount(count) => {
                write!(f, "unsupported plugin file count: {count}")
            }
            AnomalyKind::UnexpectedSingleFile => {
                write!(f, "one file found, but its name is not the merged plugin file")
            }
            AnomalyKind::UnexpectedFilePair => {
                write!(f, "two files found, but their names are not the legacy pair")
            }
        }
    }
}

/// Outcome of one detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Layout or internal problem; do nothing
    Skipped { reason: SkipReason },
    /// Nothing installed anywhere we looked; install into `target_directory`
    FreshInstallNeeded { target_directory: PathBuf },
    /// A recognized installation with a known version
    ValidInstallation {
        directory: PathBuf,
        files: Vec<PathBuf>,
        version: PluginVersion,
    },
    /// The merged plugin file is present but carries no readable version
    UnversionedInstallation { directory: PathBuf, file: PathBuf },
    /// Plugin files in a layout that needs manual attention
    AmbiguousLayout {
        files: Vec<PathBuf>,
        kind: AnomalyKind,
    },
    /// A project declares plugin files that are gone from disk
    StaleReference { missing: Vec<PathBuf> },
}

impl Resolution {
    /// Human-readable detail for skipped and anomalous outcomes
    pub fn detail(&self) -> Option<String> {
        match self {
            Resolution::Skipped { reason } => Some(reason.to_string()),
            Resolution::AmbiguousLayout { kind, .. } => Some(kind.to_string()),
            Resolution::StaleReference { missing } => Some(format!(
                "{} declared plugin file(s) missing on disk",
                missing.len()
            )),
            Resolution::UnversionedInstallation { .. } => {
                Some("merged plugin file has no readable version".to_string())
            }
            _ => None,
        }
    }

    /// Short tag used in output
    pub fn tag(&self) -> &'static str {
        match self {
            Resolution::Skipped { .. } => "skipped",
            Resolution::FreshInstallNeeded { .. } => "fresh_install_needed",
            Resolution::ValidInstallation { .. } => "valid_installation",
            Resolution::UnversionedInstallation { .. } => "unversioned_installation",
            Resolution::AmbiguousLayout { .. } => "ambiguous_layout",
            Resolution::StaleReference { .. } => "stale_reference",
        }
    }

    /// Flatten into the decision value consumed by the installer.
    pub fn decision(&self) -> InstallationDecision {
        match self {
            Resolution::Skipped { .. } | Resolution::StaleReference { .. } => {
                InstallationDecision::should_not_install()
            }
            Resolution::FreshInstallNeeded { target_directory } => InstallationDecision {
                should_install: true,
                target_directory: target_directory.clone(),
                existing_files: Vec::new(),
                version: PluginVersion::ZERO,
            },
            Resolution::ValidInstallation {
                directory,
                files,
                version,
            } => InstallationDecision {
                should_install: true,
                target_directory: directory.clone(),
                existing_files: files.clone(),
                version: *version,
            },
            Resolution::UnversionedInstallation { directory, file } => InstallationDecision {
                should_install: false,
                target_directory: directory.clone(),
                existing_files: vec![file.clone()],
                version: PluginVersion::ZERO,
            },
            Resolution::AmbiguousLayout { files, .. } => InstallationDecision {
                should_install: false,
                target_directory: PathBuf::new(),
                existing_files: files.clone(),
                version: PluginVersion::ZERO,
            },
        }
    }
}

/// Flat decision value
///
/// `should_install` is true both for a fresh install target and for a
/// confirmed, versioned existing installation; [`Resolution`] tells the two
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationDecision {
    pub should_install: bool,
    pub target_directory: PathBuf,
    pub existing_files: Vec<PathBuf>,
    pub version: PluginVersion,
}

impl InstallationDecision {
    /// Sentinel: empty target, no files, zero version
    pub fn should_not_install() -> Self {
        Self {
            should_install: false,
            target_directory: PathBuf::new(),
            existing_files: Vec::new(),
            version: PluginVersion::ZERO,
        }
    }

    /// True for the should-not-install sentinel
    pub fn is_sentinel(&self) -> bool {
        *self == Self::should_not_install()
    }
}
