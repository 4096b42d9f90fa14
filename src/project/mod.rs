//! Project model
//!
//! The detector does not own the host's project model. It only needs, per
//! project, where the project file lives and which files it declares. Hosts
//! supply that through [`Project`]; [`CsprojProject`] reads it from the MSBuild
//! project files Unity generates next to the solution.

pub mod csproj;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

pub use csproj::CsprojProject;

/// A candidate project of the solution
pub trait Project {
    /// Location of the project file itself, if known
    fn file_location(&self) -> Option<&Path>;

    /// Resolved locations of every file the project declares as a member
    fn declared_files(&self) -> &[PathBuf];
}

/// Find `*.csproj` files directly inside `solution_dir`, sorted by file name.
pub fn discover_projects(solution_dir: &Path) -> Vec<PathBuf> {
    let mut projects: Vec<PathBuf> = WalkDir::new(solution_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "csproj"))
        .collect();
    projects.sort();
    projects
}

/// Load every project file in `paths`, in the given order.
pub fn load_projects(paths: &[PathBuf]) -> Result<Vec<CsprojProject>> {
    paths.iter().map(|p| CsprojProject::load(p)).collect()
}
