//! Command-line interface for fcp.
//!
//! # Architecture
//!
//! - [`args`] - Flag definitions using clap derive macros
//! - [`plan`] - Parsed flags to an ordered list of [`Operation`]s
//! - [`dispatcher`] - Runs the operations and collects a [`RunReport`](crate::ops::RunReport)

pub mod args;
pub mod dispatcher;
pub mod plan;

pub use args::Cli;
pub use dispatcher::{dispatch, run_operation};
pub use plan::{plan, Operation};
