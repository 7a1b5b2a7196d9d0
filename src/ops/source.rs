//! `--install-source`: run the prober on local directories.

use std::path::PathBuf;

use crate::install::probe;
use crate::ui::hints;

use super::context::OpContext;
use super::report::OperationReport;

pub fn install_source(ctx: &mut OpContext<'_>, paths: &[PathBuf]) -> OperationReport {
    let mut report = OperationReport::new("install-source");
    ctx.ui.show_header("Install from source");

    for path in paths {
        ctx.ui
            .message(&format!("Installing from source: {}", path.display()));
        match probe(ctx, path) {
            Ok(outcome) if outcome.success => {
                ctx.ui
                    .success(&format!("Successfully installed from {}", path.display()));
            }
            Ok(outcome) => {
                report.fail(format!("{}: {} install failed", path.display(), outcome.method));
                ctx.ui
                    .error(&format!("Could not auto-install from {}", path.display()));
                ctx.ui
                    .show_hint(&hints::manual_install(&path.display().to_string()));
            }
            Err(e) => {
                ctx.ui.error(&e.to_string());
                report.fail(e.to_string());
            }
        }
    }
    report
}
