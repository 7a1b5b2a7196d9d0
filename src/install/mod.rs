//! Installing projects from a source directory.
//!
//! - [`markers`]: marker files and the ordered detection table
//! - [`method`]: install methods and their command plans
//! - [`prober`]: runs the selected plan through an [`OpContext`](crate::ops::OpContext)

pub mod markers;
pub mod method;
pub mod prober;

pub use markers::{detect_method, has_requirements, list_entries, method_table, Marker};
pub use method::{elevated, InstallMethod, InstallPlan};
pub use prober::{probe, ProbeOutcome};
