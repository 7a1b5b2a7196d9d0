//! Shared state for operation handlers.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::config::{FcpConfig, Tools};
use crate::error::Result;
use crate::shell::{CaptureMode, CommandResult, CommandRunner, CommandSpec};
use crate::ui::{hints, UserInterface};

use super::report::OperationReport;

/// Everything a handler needs: where commands go, where output goes, and
/// the resolved configuration.
pub struct OpContext<'a> {
    pub runner: &'a mut dyn CommandRunner,
    pub ui: &'a mut dyn UserInterface,
    pub config: &'a FcpConfig,

    /// When set, directories are not created on disk.
    pub dry_run: bool,
}

impl<'a> OpContext<'a> {
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
        config: &'a FcpConfig,
    ) -> Self {
        Self {
            runner,
            ui,
            config,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn tools(&self) -> &Tools {
        &self.config.tools
    }

    /// Run one command and report progress and failures to the UI.
    pub fn run(&mut self, spec: &CommandSpec) -> CommandResult {
        let label = spec.label();

        let result = match spec.capture() {
            CaptureMode::Capture => {
                let mut spinner = self.ui.start_spinner(&label);
                let result = self.runner.run(spec);
                let duration = format_duration(result.duration);
                if result.success {
                    spinner.finish_success(&format!("{} ({})", label, duration));
                } else {
                    spinner.finish_error(&format!("{} failed ({})", label, duration));
                }
                if let Some(out) = result.stdout.as_deref().map(str::trim) {
                    if result.success && !out.is_empty() {
                        self.ui.show_command_output(out);
                    }
                }
                result
            }
            CaptureMode::Inherit => {
                // The child owns the terminal; a spinner would garble its output.
                self.ui.message(&format!("{}...", label));
                let result = self.runner.run(spec);
                if result.success {
                    self.ui.success(&format!(
                        "{} ({})",
                        label,
                        format_duration(result.duration)
                    ));
                }
                result
            }
        };

        if !result.success {
            self.show_failure(spec, &result);
        }
        result
    }

    /// Run a command and record a failure in `report`. Returns success.
    pub fn run_checked(&mut self, spec: &CommandSpec, report: &mut OperationReport) -> bool {
        let result = self.run(spec);
        report.check(result.success, || result.failure_summary(spec))
    }

    /// Create `dir` and its parents unless it exists or this is a dry run.
    pub fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if self.dry_run {
            debug!(dir = %dir.display(), "dry run, not creating directory");
            return Ok(());
        }
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn show_failure(&mut self, spec: &CommandSpec, result: &CommandResult) {
        let mut output = result.failure_summary(spec);
        if let Some(stderr) = result.stderr_text() {
            output.push('\n');
            output.push_str(stderr);
        }

        let hint = match &result.to_error(spec) {
            Some(err) => err.missing_tool().map(hints::install_missing_tool),
            None => None,
        };
        self.ui.show_error_block(&spec.display(), &output, hint.as_deref());
    }
}

/// Human-friendly duration: `500ms`, `5.0s`, `2m 5s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
