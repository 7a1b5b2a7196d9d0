//! Error types for fcp operations.
//!
//! This module defines [`FcpError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Operation-level errors are reported and the run moves on; they never
//!   abort the remaining operations
//! - Use `anyhow::Error` (via `FcpError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fcp operations.
#[derive(Debug, Error)]
pub enum FcpError {
    /// The external program is not on the search path.
    #[error("'{tool}' is not installed or not on PATH")]
    ToolMissing { tool: String },

    /// The external program ran and returned a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    ToolFailed { command: String, code: Option<i32> },

    /// The external program could not be started for another reason.
    #[error("Could not run '{command}': {message}")]
    LaunchFailed { command: String, message: String },

    /// A file or directory given on the command line does not exist.
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A path that must be a directory names something else.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The prober found no known build or install convention.
    #[error("No install method found in {path} (contents: {})", format_entries(.entries))]
    NoInstallMethodFound { path: PathBuf, entries: Vec<String> },

    /// Failed to read or parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_entries(entries: &[String]) -> String {
    if entries.is_empty() {
        "empty".to_string()
    } else {
        entries.join(", ")
    }
}

impl FcpError {
    /// Name of the missing tool, if this error is a missing-tool error.
    pub fn missing_tool(&self) -> Option<&str> {
        match self {
            Self::ToolMissing { tool } => Some(tool),
            _ => None,
        }
    }
}

/// Result type alias for fcp operations.
pub type Result<T> = std::result::Result<T, FcpError>;
