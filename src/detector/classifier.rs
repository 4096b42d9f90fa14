//! Classification of found plugin files
//!
//! v1.8 shipped two files, v1.9 and later ship one. Anything else is reported
//! as an anomalous layout and left for the user to sort out.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{AnomalyKind, Resolution};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::plugin::{LEGACY_PLUGIN_FILES, is_merged_plugin_file};
use crate::version::{PluginVersion, extract_version};

/// Classify a non-empty set of found plugin files.
///
/// Only reads the merged plugin file, to get its version.
pub fn classify(fs: &dyn FileSystem, files: Vec<PathBuf>) -> Result<Resolution> {
    let parents = distinct_parents(&files);

    if parents.len() > 1 {
        return Ok(anomaly(files, AnomalyKind::MultipleDirectories));
    }
    let Some(directory) = parents.into_iter().next() else {
        return Ok(anomaly(files, AnomalyKind::NoParentDirectory));
    };

    match files.len() {
        1 if is_merged_plugin_file(&files[0]) => {
            let version = extract_version(fs, &files[0])?;
            if version.is_zero() {
                let file = files.into_iter().next().unwrap_or_default();
                Ok(Resolution::UnversionedInstallation { directory, file })
            } else {
                Ok(Resolution::ValidInstallation {
                    directory,
                    files,
                    version,
                })
            }
        }
        1 => Ok(anomaly(files, AnomalyKind::UnexpectedSingleFile)),
        2 if is_legacy_pair(&files[0], &files[1]) => Ok(Resolution::ValidInstallation {
            directory,
            files,
            version: PluginVersion::LEGACY,
        }),
        2 => Ok(anomaly(files, AnomalyKind::UnexpectedFilePair)),
        count => Ok(anomaly(files, AnomalyKind::UnsupportedFileCount(count))),
    }
}

fn anomaly(files: Vec<PathBuf>, kind: AnomalyKind) -> Resolution {
    warn!("Unrecognized plugin layout: {kind}");
    Resolution::AmbiguousLayout { files, kind }
}

/// Parent directories in first-seen order, skipping files without one.
fn distinct_parents(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut parents: Vec<PathBuf> = Vec::new();
    for parent in files
        .iter()
        .filter_map(|f| f.parent())
        .filter(|p| !p.as_os_str().is_empty())
    {
        if !parents.iter().any(|seen| seen == parent) {
            parents.push(parent.to_path_buf());
        }
    }
    parents
}

fn is_legacy_pair(first: &Path, second: &Path) -> bool {
    let mut names = [file_name(first), file_name(second)];
    names.sort_unstable();
    let mut expected = LEGACY_PLUGIN_FILES.map(Some);
    expected.sort_unstable();
    names == expected
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}
