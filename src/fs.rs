//! File system access used by detection
//!
//! Detection only ever reads. Everything it needs from the disk goes through
//! [`FileSystem`] so hosts can supply their own view of the project tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Read-only file system operations needed by the detector
pub trait FileSystem {
    /// True if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// True if `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Immediate child files of `dir`, sorted by path.
    ///
    /// A missing directory has no children; that is not an error.
    fn child_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Open `path` for line-oriented reading
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead + '_>>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn child_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| fs_error::list_failed(dir, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(path).map_err(|e| fs_error::read_failed(path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
