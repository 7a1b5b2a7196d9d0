//! The narrow seam between operations and the host's processes.
//!
//! Every external program goes through a [`CommandRunner`], so operation
//! handlers and the source prober can be exercised with
//! [`RecordingRunner`](super::RecordingRunner) instead of real processes.

use super::command::{execute, CommandResult, CommandSpec};
use super::platform::find_tool;

/// Executes external commands.
pub trait CommandRunner {
    /// Run one command to completion.
    fn run(&mut self, spec: &CommandSpec) -> CommandResult;

    /// Whether `program` can be found on the search path.
    fn has_tool(&self, program: &str) -> bool;
}

/// Runs commands on the host.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> CommandResult {
        execute(spec)
    }

    fn has_tool(&self, program: &str) -> bool {
        find_tool(program).is_some()
    }
}

/// Prints what would run and reports success without spawning anything.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    planned: Vec<CommandSpec>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, in order.
    pub fn planned(&self) -> &[CommandSpec] {
        &self.planned
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, spec: &CommandSpec) -> CommandResult {
        match spec.cwd() {
            Some(cwd) => println!("  [dry-run] (in {}) {}", cwd.display(), spec.display()),
            None => println!("  [dry-run] {}", spec.display()),
        }
        self.planned.push(spec.clone());
        CommandResult::success(None, None, std::time::Duration::ZERO)
    }

    fn has_tool(&self, program: &str) -> bool {
        find_tool(program).is_some()
    }
}
