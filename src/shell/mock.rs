//! Recording runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning anything.
//! It records every spec it receives and answers with scripted results.
//!
//! # Example
//!
//! ```
//! use fcp::shell::{CommandRunner, CommandSpec, RecordingRunner};
//!
//! let mut runner = RecordingRunner::new();
//! runner.fail("make install", 2);
//!
//! assert!(runner.run(&CommandSpec::new(["make"])).success);
//! assert!(!runner.run(&CommandSpec::new(["make", "install"])).success);
//! assert_eq!(runner.commands(), vec!["make", "make install"]);
//! ```

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use super::command::{CommandResult, CommandSpec};
use super::runner::CommandRunner;

/// Scripted answer for commands matching a prefix.
#[derive(Debug)]
struct Rule {
    prefix: String,
    queue: VecDeque<CommandResult>,
    sticky: Option<CommandResult>,
}

impl Rule {
    fn matches(&self, command_line: &str) -> bool {
        command_line == self.prefix || command_line.starts_with(&format!("{} ", self.prefix))
    }
}

/// Fake runner that records specs and replays scripted results.
///
/// Commands match a rule when their command line equals the rule's prefix or
/// starts with it followed by a space. The most recently added matching rule
/// wins. Unmatched commands succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    rules: Vec<Rule>,
    specs: Vec<CommandSpec>,
    unavailable: HashSet<String>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds and every tool exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer commands matching `prefix` with `result`.
    pub fn respond(&mut self, prefix: &str, result: CommandResult) {
        self.rules.push(Rule {
            prefix: prefix.to_string(),
            queue: VecDeque::new(),
            sticky: Some(result),
        });
    }

    /// Answer successive matching commands with `results`, in order.
    ///
    /// After the queue is exhausted, matching commands succeed.
    pub fn queue(&mut self, prefix: &str, results: Vec<CommandResult>) {
        self.rules.push(Rule {
            prefix: prefix.to_string(),
            queue: results.into(),
            sticky: None,
        });
    }

    /// Make commands matching `prefix` exit with `code`.
    pub fn fail(&mut self, prefix: &str, code: i32) {
        self.respond(
            prefix,
            CommandResult::failure(Some(code), None, Some(format!("exit {}", code)), Duration::ZERO),
        );
    }

    /// Pretend `program` is not installed: `has_tool` is false and running
    /// it yields a missing-tool result.
    pub fn without_tool(&mut self, program: &str) {
        self.unavailable.insert(program.to_string());
    }

    /// All specs received, in order.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Command lines received, in order.
    pub fn commands(&self) -> Vec<String> {
        self.specs.iter().map(CommandSpec::display).collect()
    }

    /// Number of commands received.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Whether any received command line starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.specs.iter().any(|s| s.display().starts_with(prefix))
    }

    fn answer(&mut self, command_line: &str) -> CommandResult {
        for rule in self.rules.iter_mut().rev() {
            if !rule.matches(command_line) {
                continue;
            }
            if let Some(result) = rule.queue.pop_front() {
                return result;
            }
            if let Some(result) = &rule.sticky {
                return result.clone();
            }
        }
        CommandResult::success(Some(String::new()), Some(String::new()), Duration::ZERO)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, spec: &CommandSpec) -> CommandResult {
        self.specs.push(spec.clone());
        if self.unavailable.contains(spec.program()) {
            return CommandResult::tool_missing(spec.program());
        }
        self.answer(&spec.display())
    }

    fn has_tool(&self, program: &str) -> bool {
        !self.unavailable.contains(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_commands_succeed() {
        let mut runner = RecordingRunner::new();
        let result = runner.run(&CommandSpec::new(["apt", "update"]));
        assert!(result.success);
        assert_eq!(runner.count(), 1);
    }

    #[test]
    fn prefix_matching_respects_word_boundaries() {
        let mut runner = RecordingRunner::new();
        runner.fail("make", 2);

        assert!(!runner.run(&CommandSpec::new(["make", "install"])).success);
        assert!(runner.run(&CommandSpec::new(["makepkg"])).success);
    }

    #[test]
    fn later_rules_take_priority() {
        let mut runner = RecordingRunner::new();
        runner.fail("git", 1);
        runner.respond(
            "git pull",
            CommandResult::success(None, None, Duration::ZERO),
        );

        assert!(runner.run(&CommandSpec::new(["git", "pull"])).success);
        assert!(!runner.run(&CommandSpec::new(["git", "clone", "x"])).success);
    }

    #[test]
    fn queued_results_replay_in_order() {
        let mut runner = RecordingRunner::new();
        runner.queue(
            "apt update",
            vec![
                CommandResult::failure(Some(100), None, None, Duration::ZERO),
                CommandResult::success(None, None, Duration::ZERO),
            ],
        );

        let spec = CommandSpec::new(["apt", "update"]);
        assert!(!runner.run(&spec).success);
        assert!(runner.run(&spec).success);
        assert!(runner.run(&spec).success);
    }

    #[test]
    fn missing_tools_are_reported() {
        let mut runner = RecordingRunner::new();
        runner.without_tool("wget");

        assert!(!runner.has_tool("wget"));
        assert!(runner.has_tool("curl"));
        assert!(runner
            .run(&CommandSpec::new(["wget", "http://x"]))
            .is_tool_missing());
        assert!(runner.ran("wget"));
    }
}
