//! Configuration schema definitions for fcp.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field is optional in the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcpConfig {
    /// Directories and output defaults
    pub settings: Settings,

    /// Names of the external programs fcp drives
    pub tools: Tools,
}

/// Global settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `--github` and `--github-install` put checkouts
    pub github_dir: PathBuf,

    /// Where `--download` puts fetched files
    pub download_dir: PathBuf,

    /// Output mode when neither --verbose nor --quiet is given
    pub default_output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_dir: PathBuf::from("./repos"),
            download_dir: PathBuf::from("./downloads"),
            default_output: OutputMode::Normal,
        }
    }
}

/// External program names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    /// System package manager (apt-compatible command line)
    pub package_manager: String,

    /// Python package installer
    pub pip: String,

    /// Python interpreter for setup.py and *.py scripts
    pub python: String,

    /// Shell used for *.sh scripts
    pub shell: String,

    /// Version control client
    pub git: String,

    /// Privilege elevation prefix for install steps; `null` disables it
    pub elevate: Option<String>,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            package_manager: "apt".to_string(),
            pip: "pip3".to_string(),
            python: "python3".to_string(),
            shell: "bash".to_string(),
            git: "git".to_string(),
            elevate: Some("sudo".to_string()),
        }
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
