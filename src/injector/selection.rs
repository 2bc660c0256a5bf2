use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MARKDOWN_EXTENSION: &str = ".md";
pub const EXCLUDED_FILE_NAME: &str = "README.md";

/// True for markdown pages other than `README.md`. Matches on the raw bytes
/// of the base name, case-sensitively, so non-UTF-8 names are still seen.
pub fn is_candidate(file_name: impl AsRef<OsStr>) -> bool {
    let name = file_name.as_ref().as_encoded_bytes();
    name.ends_with(MARKDOWN_EXTENSION.as_bytes()) && name != EXCLUDED_FILE_NAME.as_bytes()
}

/// Recursively lists candidate pages under `folder`.
///
/// Symlinks to files are listed (and later written through); symlinked
/// directories are not descended into. Walk errors abort the listing instead
/// of being skipped.
pub fn enumerate_candidates(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", folder.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        if is_candidate(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
