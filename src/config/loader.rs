//! Configuration file discovery and loading.
//!
//! fcp reads at most one file: the path given with `--config`, or the user
//! config at `<config_dir>/fcp/config.yml` when it exists. CLI flags and
//! environment variables are layered on top by [`FcpConfig::with_overrides`].

use crate::config::schema::FcpConfig;
use crate::error::{FcpError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default user config location: `<config_dir>/fcp/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("fcp").join("config.yml"))
}

/// Load a single config file and parse it into FcpConfig.
///
/// # Errors
///
/// Returns `PathNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FcpConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FcpError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FcpError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into FcpConfig.
///
/// An empty file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FcpConfig> {
    if content.trim().is_empty() {
        return Ok(FcpConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| FcpError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the default user config is
/// used if present, otherwise built-in defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<FcpConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading user config");
            load_config_file(&path)
        }
        _ => Ok(FcpConfig::default()),
    }
}

impl FcpConfig {
    /// Apply directory overrides from flags or environment variables.
    pub fn with_overrides(
        mut self,
        github_dir: Option<PathBuf>,
        download_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = github_dir {
            self.settings.github_dir = dir;
        }
        if let Some(dir) = download_dir {
            self.settings.download_dir = dir;
        }
        self
    }
}
