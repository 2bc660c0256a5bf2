//! Inserts "download PDF" blocks into certification pages.
//!
//! A run walks each configured certification directory under the docs root,
//! and rewrites every markdown page (except `README.md`) that does not yet
//! carry a download block, placing the block right after the page's first
//! `# ` heading.
//!
//! Runs are fail-fast and non-transactional: the first I/O error aborts the
//! run, and pages rewritten before it stay rewritten.

pub mod block;
pub mod document;
pub mod selection;

use crate::config::InjectorConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use block::{download_block, pdf_name};
pub use document::{has_download_link, insert_after_first_h1};
pub use selection::{enumerate_candidates, is_candidate};

/// What happened to a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    AlreadyLinked,
    /// No `# ` line to anchor the block; the file was not touched.
    NoHeading,
}

/// Result of a full run.
#[derive(Debug, Clone, Default)]
pub struct InjectionSummary {
    pub scanned: usize,
    pub updated: usize,
    pub already_linked: usize,
    pub missing_heading: usize,
    /// Updated pages, relative to the docs root.
    pub updated_paths: Vec<PathBuf>,
    /// Pages left alone for lack of a heading, relative to the docs root.
    pub headingless_paths: Vec<PathBuf>,
    /// Configured directories that were not present.
    pub missing_dirs: Vec<String>,
}

impl InjectionSummary {
    fn record(&mut self, relative: PathBuf, outcome: FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Updated => {
                self.updated += 1;
                self.updated_paths.push(relative);
            }
            FileOutcome::AlreadyLinked => self.already_linked += 1,
            FileOutcome::NoHeading => {
                self.missing_heading += 1;
                self.headingless_paths.push(relative);
            }
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "Scanned {} markdown files: {} updated, {} already linked, {} without heading.",
            self.scanned, self.updated, self.already_linked, self.missing_heading
        )
    }
}

pub struct LinkInjector {
    root: PathBuf,
    config: InjectorConfig,
}

impl LinkInjector {
    pub fn new(root: impl Into<PathBuf>, config: InjectorConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Processes every configured directory, printing one line per updated page.
    pub fn run(&self) -> Result<InjectionSummary> {
        let mut summary = InjectionSummary::default();
        for cert_dir in &self.config.cert_dirs {
            let folder = self.root.join(cert_dir);
            if !folder.exists() {
                summary.missing_dirs.push(cert_dir.clone());
                continue;
            }
            for path in enumerate_candidates(&folder)? {
                let outcome = self.process_file(&path)?;
                let relative = self.relative(&path);
                if outcome == FileOutcome::Updated {
                    println!("Added download link to {}", relative.display());
                }
                summary.record(relative, outcome);
            }
        }
        Ok(summary)
    }

    /// Reads, transforms and (when needed) rewrites one page in place.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if has_download_link(&content) {
            return Ok(FileOutcome::AlreadyLinked);
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name {}", path.display()))?;
        let block = download_block(&pdf_name(file_name));
        let Some(updated) = insert_after_first_h1(&content, &block) else {
            return Ok(FileOutcome::NoHeading);
        };

        fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(FileOutcome::Updated)
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
