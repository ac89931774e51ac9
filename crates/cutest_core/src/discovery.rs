//! Test file discovery.

use crate::error::{CutestError, Result};
use crate::types::TestFile;
use std::fs;
use std::path::Path;
use tracing::debug;

/// List the test files directly inside `suite_dir`.
///
/// Only regular files (symlinks are followed) whose name ends with
/// `extension` are returned, sorted by path. Subdirectories are never
/// entered.
///
/// # Errors
///
/// Returns [`CutestError::SuiteUnreadable`] if the directory is missing or
/// cannot be listed.
pub fn discover(suite_dir: &Path, extension: &str) -> Result<Vec<TestFile>> {
    let unreadable = |source| CutestError::SuiteUnreadable {
        path: suite_dir.to_path_buf(),
        source,
    };

    let mut tests = Vec::new();
    for entry in fs::read_dir(suite_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        let matches_suffix = entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(extension.as_bytes());
        if !matches_suffix {
            continue;
        }

        // Broken links and files that vanish mid-listing are skipped.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => tests.push(TestFile::new(path)),
            Ok(_) => debug!(path = %path.display(), "skipping non-regular entry"),
            Err(e) => debug!(path = %path.display(), error = %e, "skipping unreadable entry"),
        }
    }

    tests.sort();
    debug!(suite = %suite_dir.display(), count = tests.len(), "discovered test files");
    Ok(tests)
}
