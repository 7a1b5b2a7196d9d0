//! Running planned operations.

use tracing::debug;

use crate::ops::{downloads, files, packages, repos, source, system};
use crate::ops::{OpContext, OperationReport, RunReport};

use super::plan::Operation;

/// Run one operation to completion.
pub fn run_operation(ctx: &mut OpContext<'_>, op: &Operation) -> OperationReport {
    debug!(operation = op.name(), "running");
    match op {
        Operation::Update => packages::update(ctx),
        Operation::Upgrade => packages::upgrade(ctx),
        Operation::Install(pkgs) => packages::install(ctx, pkgs),
        Operation::AutoInstall(pkgs) => packages::auto_install(ctx, pkgs),
        Operation::Remove(pkgs) => packages::remove(ctx, pkgs),
        Operation::Autoremove => packages::autoremove(ctx),
        Operation::Autoclean => packages::autoclean(ctx),
        Operation::Chmod(paths) => files::chmod(ctx, paths),
        Operation::InstallDeb(paths) => files::install_deb(ctx, paths),
        Operation::InstallSnap(pkgs) => packages::install_snap(ctx, pkgs),
        Operation::InstallFlatpak(pkgs) => packages::install_flatpak(ctx, pkgs),
        Operation::InstallPip(pkgs) => packages::install_pip(ctx, pkgs),
        Operation::Github(urls) => repos::github(ctx, urls),
        Operation::GithubInstall(urls) => repos::github_install(ctx, urls),
        Operation::Download(urls) => downloads::download(ctx, urls),
        Operation::InstallSource(paths) => source::install_source(ctx, paths),
        Operation::Shutdown => system::shutdown(ctx),
    }
}

/// Run every operation in order, then show the summary.
///
/// A failed operation never stops the ones after it.
pub fn dispatch(ctx: &mut OpContext<'_>, ops: &[Operation]) -> RunReport {
    let mut run = RunReport::new();
    for op in ops {
        let report = run_operation(ctx, op);
        if !report.success {
            debug!(operation = op.name(), failures = ?report.failures, "operation failed");
        }
        run.push(report);
    }
    ctx.ui.show_summary(&run);
    run
}
