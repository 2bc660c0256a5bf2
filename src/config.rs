//! Configuration for the download-link injector.
//!
//! Optionally stored in a TOML file at the documentation root:
//!   <root>/download-links.toml
//!
//! The file only lists which certification directories to scan. When it is
//! absent the built-in list is used, in the same order.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, resolved against the documentation root.
pub const CONFIG_FILE_NAME: &str = "download-links.toml";

/// Environment variable overriding the documentation root.
pub const ROOT_ENV_VAR: &str = "CERTDOCS_ROOT";

const DEFAULT_CERT_DIRS: &[&str] = &[
    // Kubestronaut
    "kcna", "cka", "ckad", "cks", "kcsa",
    // Additional certs
    "pca", "cba", "cca", "cgoa", "cnpa", "cnpe", "capa",
];

/// Root configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InjectorConfig {
    /// Certification directory names, scanned in order relative to the root.
    #[serde(default = "default_cert_dirs")]
    pub cert_dirs: Vec<String>,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            cert_dirs: default_cert_dirs(),
        }
    }
}

impl InjectorConfig {
    pub fn with_dirs<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cert_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }
}

fn default_cert_dirs() -> Vec<String> {
    DEFAULT_CERT_DIRS.iter().map(|d| d.to_string()).collect()
}

/// Returns the documentation root.
///
/// Order of precedence:
/// 1. An explicit path (the `--root` flag).
/// 2. `CERTDOCS_ROOT` environment variable.
/// 3. The current working directory.
pub fn docs_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(ROOT_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    env::current_dir().context("Unable to determine current directory")
}

/// Path to the config file under `root`.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Loads the configuration from `path` or returns defaults when it is missing.
pub fn load_or_default(path: &Path) -> Result<InjectorConfig> {
    if path.exists() {
        load(path)
    } else {
        Ok(InjectorConfig::default())
    }
}

/// Loads an explicitly requested config file; a missing file is an error.
pub fn load(path: &Path) -> Result<InjectorConfig> {
    if !path.exists() {
        bail!("Config file {} not found", path.display());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: InjectorConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}
