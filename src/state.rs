//! Remembered installation directory (plugin-detect.yaml)
//!
//! Detection itself is read-only. The CLI keeps the directory the plugin was
//! last resolved to here and feeds it back as the previous installation
//! directory on the next run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Result, state as state_error};

/// State file name
pub const STATE_FILE: &str = "plugin-detect.yaml";

/// Unity's per-project cache directory, not under version control
pub const STATE_DIR: &str = "Library";

/// Persisted detector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorState {
    /// Target directory of the last resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_installation_dir: Option<PathBuf>,
}

impl DetectorState {
    /// Default state file location for a solution directory
    pub fn default_path(solution_dir: &Path) -> PathBuf {
        solution_dir.join(STATE_DIR).join(STATE_FILE)
    }

    /// Serialize state to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Load state from `path`; a missing file means a first run.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| state_error::parse_failed(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| state_error::parse_failed(path, e))
    }

    /// Write state to `path`, replacing any previous file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_yaml()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        fs::create_dir_all(dir).map_err(|e| state_error::write_failed(path, e))?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| state_error::write_failed(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| state_error::write_failed(path, e))?;
        tmp.persist(path)
            .map_err(|e| state_error::write_failed(path, e.error))?;
        Ok(())
    }
}
