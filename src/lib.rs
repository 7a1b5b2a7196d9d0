//! fcp - a fast command prompt for package, repository and download chores.
//!
//! fcp turns a handful of flags into calls to apt, dpkg, snap, flatpak, pip,
//! git, wget or curl, and can install a checkout from source by probing it
//! for well-known build files.
//!
//! # Modules
//!
//! - [`cli`] - Flag parsing, operation planning and dispatch
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`install`] - Source-install prober
//! - [`ops`] - Operation handlers and result reports
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners, status lines and summaries
//!
//! # Example
//!
//! ```
//! use fcp::config::FcpConfig;
//! use fcp::ops::{packages, OpContext};
//! use fcp::shell::RecordingRunner;
//! use fcp::ui::MockUI;
//!
//! let mut runner = RecordingRunner::new();
//! let mut ui = MockUI::new();
//! let config = FcpConfig::default();
//! let mut ctx = OpContext::new(&mut runner, &mut ui, &config);
//!
//! let report = packages::install(&mut ctx, &["vim".to_string()]);
//! assert!(report.success);
//! assert_eq!(runner.commands(), vec!["apt install -y vim"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod ops;
pub mod shell;
pub mod ui;

pub use error::{FcpError, Result};
