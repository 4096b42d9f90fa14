//! Test fixtures for laying out Unity projects on disk.
//!
//! ```ignore
//! use crate::test_fixtures::{create_unity_project, create_test_files};
//!
//! let temp = create_unity_project();
//! create_test_files(&temp, &[("Assets/Plugins/Editor/JetBrains/Unity3DRider.cs", "// Version: 2.0.0\n")]);
//! ```

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory holding `Game.sln` and an empty `Assets/` directory.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn create_unity_project() -> TempDir {
    let temp = create_temp_dir();
    std::fs::create_dir_all(temp.path().join("Assets")).expect("Failed to create Assets");
    std::fs::write(temp.path().join("Game.sln"), "").expect("Failed to write solution");
    temp
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples. Paths are relative to the temp dir.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_unity_project() {
        let temp = create_unity_project();
        assert!(temp.path().join("Assets").is_dir());
        assert!(temp.path().join("Game.sln").is_file());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("Assets/Plugins/RiderPlugin.cs", "// plugin")]);

        let content = std::fs::read_to_string(temp.path().join("Assets/Plugins/RiderPlugin.cs"))
            .expect("Failed to read");
        assert_eq!(content, "// plugin");
    }
}
