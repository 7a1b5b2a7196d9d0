//! Operation handlers.
//!
//! Each handler builds the commands for one requested operation, runs them
//! through an [`OpContext`], and returns an [`OperationReport`]. Handlers
//! never abort the run; failures are recorded and reported.

pub mod context;
pub mod downloads;
pub mod files;
pub mod packages;
pub mod report;
pub mod repos;
pub mod source;
pub mod system;

pub use context::{format_duration, OpContext};
pub use downloads::filename_from_url;
pub use repos::repo_name;
pub use report::{OperationReport, RunReport};
