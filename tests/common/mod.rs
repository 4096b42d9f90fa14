//! Common test utilities for plugin-detect integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A Unity project laid out in a temp dir
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root (where the solution lives)
    pub path: PathBuf,
}

impl TestProject {
    /// Create a project with `Game.sln` and an empty `Assets/`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("Assets")).expect("Failed to create Assets");
        std::fs::write(path.join("Game.sln"), "").expect("Failed to write solution");
        Self { temp, path }
    }

    /// Create a directory with a solution but no `Assets/`
    #[allow(dead_code)]
    pub fn without_assets() -> Self {
        let project = Self::new();
        std::fs::remove_dir_all(project.path.join("Assets")).expect("Failed to remove Assets");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a generated-style .csproj declaring `members`
    #[allow(dead_code)]
    pub fn write_csproj(&self, name: &str, members: &[&str]) {
        let items: String = members
            .iter()
            .map(|m| format!("    <Compile Include=\"{}\" />\n", m.replace('/', "\\")))
            .collect();
        self.write_file(
            name,
            &format!("<Project>\n  <ItemGroup>\n{items}  </ItemGroup>\n</Project>\n"),
        );
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path to the solution file
    pub fn solution(&self) -> PathBuf {
        self.path.join("Game.sln")
    }
}

/// Command for the plugin-detect binary with a clean environment
#[allow(deprecated)]
pub fn plugin_detect_cmd() -> Command {
    let mut cmd = Command::cargo_bin("plugin-detect").expect("binary should be built");
    cmd.env_remove("PLUGIN_DETECT_STATE").env_remove("RUST_LOG");
    cmd
}

/// Run `detect --json` and parse the output
#[allow(dead_code)]
pub fn detect_json(project: &TestProject, extra: &[&str]) -> serde_json::Value {
    let output = plugin_detect_cmd()
        .arg("detect")
        .arg(project.solution())
        .arg("--json")
        .args(extra)
        .output()
        .expect("Failed to run plugin-detect");
    assert!(
        output.status.success(),
        "plugin-detect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be JSON")
}
