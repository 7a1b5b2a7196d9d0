//! Configuration loading and parsing for fcp.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use fcp::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "tools:\n  pip: pip\n").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.tools.pip, "pip");
//! assert_eq!(config.tools.python, "python3");
//! ```
//!
//! # Precedence
//!
//! 1. Command-line flags
//! 2. Environment variables (`FCP_GITHUB_DIR`, `FCP_DOWNLOAD_DIR`)
//! 3. Config file
//! 4. Built-in defaults

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{FcpConfig, OutputMode, Settings, Tools};
