//! Plugin installation detection
//!
//! Given the solution location, its candidate projects and the directory the
//! plugin was installed into last time, [`PluginDetector::resolve`] decides
//! whether the plugin is installed, where, and at which version.
//!
//! On the first run the project files are trusted over the default location:
//! they describe the project as the user last saved it. Afterwards the
//! remembered directory wins, so a stale copy elsewhere in the tree is not
//! picked up.
//!
//! Detection never fails. Every error is logged and turned into
//! [`Resolution::Skipped`].

pub mod classifier;
pub mod scanner;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::{Resolution, SkipReason};
use crate::error::Result;
use crate::fs::{FileSystem, StdFileSystem};
use crate::plugin::{ASSETS_DIR, default_install_dir};
use crate::project::Project;

pub use classifier::classify;
pub use scanner::{ScanOutcome, scan_directory, scan_project};

/// Decides where the plugin lives for one solution
#[derive(Debug, Clone)]
pub struct PluginDetector<F = StdFileSystem> {
    solution_file: PathBuf,
    fs: F,
}

impl PluginDetector<StdFileSystem> {
    /// Detector over the real file system
    pub fn for_solution(solution_file: impl Into<PathBuf>) -> Self {
        Self::new(solution_file, StdFileSystem)
    }
}

impl<F: FileSystem> PluginDetector<F> {
    pub fn new(solution_file: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            solution_file: solution_file.into(),
            fs,
        }
    }

    /// Directory containing the solution file, if it has a non-empty one
    pub fn solution_dir(&self) -> Option<&Path> {
        self.solution_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Decide whether and where the plugin is installed.
    ///
    /// `projects` are searched in the order given. `previous_installation_dir`
    /// is the target directory remembered from the last run; `None` or an
    /// empty path means this is the first run.
    pub fn resolve<P: Project>(
        &self,
        projects: &[P],
        previous_installation_dir: Option<&Path>,
    ) -> Resolution {
        match self.try_resolve(projects, previous_installation_dir) {
            Ok(resolution) => resolution,
            Err(err) => {
                debug!(error = %err, "Plugin detection failed");
                Resolution::Skipped {
                    reason: SkipReason::InternalError,
                }
            }
        }
    }

    fn try_resolve<P: Project>(
        &self,
        projects: &[P],
        previous_installation_dir: Option<&Path>,
    ) -> Result<Resolution> {
        let Some(solution_dir) = self.solution_dir() else {
            warn!("Solution dir is null or empty. Skipping installation.");
            return Ok(Resolution::Skipped {
                reason: SkipReason::NoSolutionDirectory,
            });
        };

        if !solution_dir.is_absolute() {
            warn!("Solution dir is not absolute; continuing.");
        }

        let assets_dir = solution_dir.join(ASSETS_DIR);
        if !self.fs.is_dir(&assets_dir) {
            info!("No Assets directory in the same directory as solution. Skipping installation.");
            return Ok(Resolution::Skipped {
                reason: SkipReason::NoAssetsDirectory,
            });
        }

        let default_dir = default_install_dir(&assets_dir);

        let previous = previous_installation_dir.filter(|dir| !dir.as_os_str().is_empty());
        let Some(previous) = previous else {
            // e.g. fresh checkout from VCS
            if let Some(found) = self.find_in_solution(projects)? {
                return Ok(found);
            }
            if let Some(found) = self.find_on_disk(&default_dir)? {
                return Ok(found);
            }
            return Ok(Resolution::FreshInstallNeeded {
                target_directory: default_dir,
            });
        };

        if let Some(found) = self.find_on_disk(previous)? {
            return Ok(found);
        }

        // Moved by the user since the last install; visible once the
        // project files are regenerated.
        if let Some(found) = self.find_in_solution(projects)? {
            return Ok(found);
        }

        info!(
            "Plugin not found in previous installation dir '{}' or in solution. Falling back to default directory.",
            previous.display()
        );
        Ok(Resolution::FreshInstallNeeded {
            target_directory: default_dir,
        })
    }

    fn find_in_solution<P: Project>(&self, projects: &[P]) -> Result<Option<Resolution>> {
        debug!("Looking for plugin in solution.");
        for project in projects {
            match scan_project(&self.fs, project) {
                ScanOutcome::NotApplicable | ScanOutcome::NotFound => {}
                ScanOutcome::Stale(missing) => {
                    debug!(
                        "Plugin was moved and solution was not updated. Will wait until user reopens updated solution."
                    );
                    return Ok(Some(Resolution::StaleReference { missing }));
                }
                ScanOutcome::Found(files) => return classify(&self.fs, files).map(Some),
            }
        }
        Ok(None)
    }

    fn find_on_disk(&self, directory: &Path) -> Result<Option<Resolution>> {
        debug!("Looking for plugin on disk: '{}'", directory.display());
        match scan_directory(&self.fs, directory)? {
            ScanOutcome::Found(files) => classify(&self.fs, files).map(Some),
            _ => Ok(None),
        }
    }
}
