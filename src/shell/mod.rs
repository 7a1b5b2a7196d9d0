//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CaptureMode, CommandResult, CommandSpec, LaunchError};
pub use mock::RecordingRunner;
pub use platform::{find_tool, is_ci, is_elevated};
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
