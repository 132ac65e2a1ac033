//! Resolves where a record goes and writes it there.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::record::TestRecord;

const FALLBACK_STEM: &str = "new_test";

/// Derives a file stem from a test name: lower-cased, spaces to underscores.
pub fn slug(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_lowercase().replace(' ', "_"),
        _ => FALLBACK_STEM.to_string(),
    }
}

/// Computes the path of a new test file, `<root>/<category>/<file>.json`.
pub fn new_test_path(
    root: &Path,
    category: &str,
    filename: Option<&str>,
    record: &TestRecord,
) -> PathBuf {
    let mut file = match filename {
        Some(filename) => filename.to_string(),
        None => slug(record.name.as_deref()),
    };
    if !file.ends_with(".json") {
        file.push_str(".json");
    }
    root.join(category).join(file)
}

/// Creates any missing parent directories of `path`.
pub fn ensure_parent(path: &Path) -> ScaffoldResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io("create directory", parent, e))
}

/// Normalizes and writes `record` to `path`, replacing any existing file.
pub fn save(path: &Path, record: &TestRecord) -> ScaffoldResult<()> {
    let mut record = record.clone();
    record.normalize();
    let json = record.to_json()?;
    std::fs::write(path, json).map_err(|e| ScaffoldError::io("write", path, e))?;
    info!(path = %path.display(), "saved test record");
    Ok(())
}
