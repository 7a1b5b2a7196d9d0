//! System power operations.

use crate::shell::CommandSpec;

use super::context::OpContext;
use super::report::OperationReport;

/// `shutdown now`. Always the last operation of a run.
pub fn shutdown(ctx: &mut OpContext<'_>) -> OperationReport {
    let mut report = OperationReport::new("shutdown");
    ctx.ui.show_header("Shutdown");
    ctx.ui.warning("Shutting down the system...");
    let spec = CommandSpec::new(["shutdown", "now"]).with_description("System shutdown");
    ctx.run_checked(&spec, &mut report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FcpConfig;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;

    #[test]
    fn shutdown_result_counts() {
        let mut runner = RecordingRunner::new();
        runner.fail("shutdown", 1);
        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = shutdown(&mut ctx);

        assert_eq!(runner.commands(), vec!["shutdown now"]);
        assert!(!report.success);
        assert!(ui.has_warning("Shutting down"));
    }
}
