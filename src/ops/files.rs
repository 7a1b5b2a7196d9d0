//! Local file operations: making files executable and installing `.deb`s.

use std::path::{Path, PathBuf};

use crate::error::FcpError;
use crate::shell::CommandSpec;

use super::context::OpContext;
use super::report::OperationReport;

/// `chmod +x` a file.
pub fn chmod_spec(path: &Path) -> CommandSpec {
    CommandSpec::new(["chmod".to_string(), "+x".to_string(), path_arg(path)])
        .with_description(format!("Making {} executable", path.display()))
}

/// Report a missing path argument and record it as a failure.
fn missing(ctx: &mut OpContext<'_>, report: &mut OperationReport, path: &Path) {
    let err = FcpError::PathNotFound {
        path: path.to_path_buf(),
    };
    ctx.ui.error(&err.to_string());
    report.fail(err.to_string());
}

/// `chmod +x` each file. Missing files fail without running anything.
pub fn chmod(ctx: &mut OpContext<'_>, files: &[PathBuf]) -> OperationReport {
    let mut report = OperationReport::new("chmod");
    ctx.ui.show_header("Chmod");
    for file in files {
        if !file.exists() {
            missing(ctx, &mut report, file);
            continue;
        }
        ctx.run_checked(&chmod_spec(file), &mut report);
    }
    report
}

/// `dpkg -i` each package, then let the package manager pull in missing
/// dependencies. Both steps count toward the result.
pub fn install_deb(ctx: &mut OpContext<'_>, files: &[PathBuf]) -> OperationReport {
    let mut report = OperationReport::new("install-deb");
    ctx.ui.show_header("Install .deb");
    for file in files {
        if !file.exists() {
            missing(ctx, &mut report, file);
            continue;
        }

        let dpkg = CommandSpec::new(["dpkg".to_string(), "-i".to_string(), path_arg(file)])
            .with_description(format!("Installing .deb package: {}", file.display()));
        ctx.run_checked(&dpkg, &mut report);

        // Runs even when dpkg failed.
        let pm = ctx.tools().package_manager.clone();
        let fix = CommandSpec::new([pm.as_str(), "install", "-f", "-y"])
            .with_description("Fixing dependencies");
        ctx.run_checked(&fix, &mut report);
    }
    report
}

pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
