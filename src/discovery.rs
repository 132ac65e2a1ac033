use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{ScaffoldError, ScaffoldResult};

/// Finds existing test files under a test root.
#[derive(Debug)]
pub struct TestDiscoverer;

impl TestDiscoverer {
    /// Returns true if the given path has a .json extension.
    fn is_test_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "json")
    }

    /// Recursively scans a directory for `.json` test files.
    ///
    /// A missing root yields no files. The returned list is sorted so the
    /// selection menu is stable between runs.
    pub fn discover_test_files<P: AsRef<Path>>(root: P) -> ScaffoldResult<Vec<PathBuf>> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| ScaffoldError::Discovery {
                root: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !Self::is_test_file(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }
        files.sort();
        Ok(files)
    }
}
