//! Plugin file scanning
//!
//! Two sources can tell us where plugin files are: the members a project
//! declares, and the files actually sitting in a directory.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::plugin::{ASSETS_DIR, is_plugin_file};
use crate::project::Project;

/// Result of scanning one source for plugin files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The source is not a Unity project and was not searched
    NotApplicable,
    /// Searched, no plugin files
    NotFound,
    /// Plugin files found and present on disk
    Found(Vec<PathBuf>),
    /// The project declares plugin files that no longer exist.
    ///
    /// Callers must stop looking: the project description is out of date and
    /// any other answer would flip once it is regenerated.
    Stale(Vec<PathBuf>),
}

/// Scan the members a project declares.
pub fn scan_project(fs: &dyn FileSystem, project: &dyn Project) -> ScanOutcome {
    let has_assets = project
        .file_location()
        .and_then(Path::parent)
        .is_some_and(|dir| fs.is_dir(&dir.join(ASSETS_DIR)));
    if !has_assets {
        return ScanOutcome::NotApplicable;
    }

    let plugin_files: Vec<PathBuf> = project
        .declared_files()
        .iter()
        .filter(|f| is_plugin_file(f))
        .cloned()
        .collect();

    let missing: Vec<PathBuf> = plugin_files
        .iter()
        .filter(|f| !fs.is_file(f))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return ScanOutcome::Stale(missing);
    }

    if plugin_files.is_empty() {
        ScanOutcome::NotFound
    } else {
        ScanOutcome::Found(plugin_files)
    }
}

/// Scan the immediate files of `directory`.
pub fn scan_directory(fs: &dyn FileSystem, directory: &Path) -> Result<ScanOutcome> {
    let plugin_files: Vec<PathBuf> = fs
        .child_files(directory)?
        .into_iter()
        .filter(|f| is_plugin_file(f))
        .collect();

    if plugin_files.is_empty() {
        Ok(ScanOutcome::NotFound)
    } else {
        Ok(ScanOutcome::Found(plugin_files))
    }
}
