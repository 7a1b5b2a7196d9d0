//! External command description and execution.

use crate::error::FcpError;
use crate::shell::platform::find_tool;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Pipe stdout/stderr and return them as text.
    #[default]
    Capture,
    /// Let the child write to the terminal (progress bars, prompts).
    /// Only the exit status is observed.
    Inherit,
}

/// One external program invocation: argv, working directory, description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    args: Vec<String>,
    cwd: Option<PathBuf>,
    description: Option<String>,
    capture: CaptureMode,
}

impl CommandSpec {
    /// Create a spec from an argument list, program name first.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            description: None,
            capture: CaptureMode::Capture,
        }
    }

    /// Run in the given working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Let the child inherit the terminal instead of capturing output.
    pub fn inherit(mut self) -> Self {
        self.capture = CaptureMode::Inherit;
        self
    }

    /// Program name (first argument), or an empty string for an empty spec.
    pub fn program(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Full argument list, program included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn capture(&self) -> CaptureMode {
        self.capture
    }

    /// The command line as typed in a shell.
    pub fn display(&self) -> String {
        self.args.join(" ")
    }

    /// Description if set, otherwise the command line.
    pub fn label(&self) -> String {
        self.description.clone().unwrap_or_else(|| self.display())
    }
}

/// Why a command never got to produce an exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// Executable not found on the search path.
    ToolMissing { tool: String },
    /// Any other spawn failure (permissions, bad working directory, ...).
    Spawn { message: String },
}

/// Result of executing an external command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Exit code (None if killed by signal or never launched).
    pub exit_code: Option<i32>,

    /// Standard output, when captured.
    pub stdout: Option<String>,

    /// Standard error, when captured.
    pub stderr: Option<String>,

    /// Set when the program could not be started at all.
    pub launch_error: Option<LaunchError>,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: Option<String>, stderr: Option<String>, duration: Duration) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            stdout,
            stderr,
            launch_error: None,
            duration,
        }
    }

    /// Create a failure result for a program that ran and exited non-zero.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: Option<String>,
        stderr: Option<String>,
        duration: Duration,
    ) -> Self {
        Self {
            success: false,
            exit_code,
            stdout,
            stderr,
            launch_error: None,
            duration,
        }
    }

    /// Create a result for a program that is not installed.
    pub fn tool_missing(tool: &str) -> Self {
        Self::launch_failure(LaunchError::ToolMissing {
            tool: tool.to_string(),
        })
    }

    /// Create a result for any other launch failure.
    pub fn spawn_failed(message: impl Into<String>) -> Self {
        Self::launch_failure(LaunchError::Spawn {
            message: message.into(),
        })
    }

    fn launch_failure(error: LaunchError) -> Self {
        Self {
            success: false,
            exit_code: None,
            stdout: None,
            stderr: None,
            launch_error: Some(error),
            duration: Duration::ZERO,
        }
    }

    pub fn is_tool_missing(&self) -> bool {
        matches!(self.launch_error, Some(LaunchError::ToolMissing { .. }))
    }

    /// Captured stderr, trimmed, if there is any.
    pub fn stderr_text(&self) -> Option<&str> {
        self.stderr
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// One line saying why the command failed.
    pub fn failure_summary(&self, spec: &CommandSpec) -> String {
        match self.to_error(spec) {
            Some(err) => err.to_string(),
            None => format!("{} succeeded", spec.display()),
        }
    }

    /// Convert a failed result into the matching error, `None` on success.
    pub fn to_error(&self, spec: &CommandSpec) -> Option<FcpError> {
        if self.success {
            return None;
        }
        Some(match &self.launch_error {
            Some(LaunchError::ToolMissing { tool }) => FcpError::ToolMissing { tool: tool.clone() },
            Some(LaunchError::Spawn { message }) => FcpError::LaunchFailed {
                command: spec.display(),
                message: message.clone(),
            },
            None => FcpError::ToolFailed {
                command: spec.display(),
                code: self.exit_code,
            },
        })
    }
}

/// Execute a command spec on the host.
///
/// Never returns an error: launch problems are folded into the result so the
/// caller can report them alongside ordinary non-zero exits.
pub fn execute(spec: &CommandSpec) -> CommandResult {
    let start = Instant::now();

    let Some((program, args)) = spec.args().split_first() else {
        return CommandResult::spawn_failed("empty command");
    };

    let mut cmd = Command::new(program);
    cmd.args(args);

    // A missing cwd also surfaces as NotFound from spawn; catch it first so it
    // is not mistaken for a missing program.
    if let Some(cwd) = spec.cwd() {
        if !cwd.is_dir() {
            return CommandResult::spawn_failed(format!(
                "working directory {} does not exist",
                cwd.display()
            ));
        }
        cmd.current_dir(cwd);
    }

    tracing::debug!(
        command = %spec.display(),
        cwd = ?spec.cwd(),
        capture = ?spec.capture(),
        "spawning"
    );

    match spec.capture() {
        CaptureMode::Capture => {
            cmd.stdin(Stdio::null());
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());

            let output = match cmd.output() {
                Ok(output) => output,
                Err(e) => return launch_error(program, e),
            };

            let duration = start.elapsed();
            let stdout = Some(String::from_utf8_lossy(&output.stdout).to_string());
            let stderr = Some(String::from_utf8_lossy(&output.stderr).to_string());

            if output.status.success() {
                CommandResult::success(stdout, stderr, duration)
            } else {
                CommandResult::failure(output.status.code(), stdout, stderr, duration)
            }
        }
        CaptureMode::Inherit => {
            let status = match cmd.status() {
                Ok(status) => status,
                Err(e) => return launch_error(program, e),
            };

            let duration = start.elapsed();
            if status.success() {
                CommandResult::success(None, None, duration)
            } else {
                CommandResult::failure(status.code(), None, None, duration)
            }
        }
    }
}

fn launch_error(program: &str, err: std::io::Error) -> CommandResult {
    tracing::debug!(program, error = %err, "launch failed");
    // A path, or a program that is on PATH, failed for another reason
    // (missing cwd or shebang interpreter).
    let missing = err.kind() == ErrorKind::NotFound
        && !program.contains(std::path::MAIN_SEPARATOR)
        && find_tool(program).is_none();
    if missing {
        CommandResult::tool_missing(program)
    } else {
        CommandResult::spawn_failed(err.to_string())
    }
}
