//! Package manager operations: apt, snap, flatpak and pip.

use crate::shell::CommandSpec;

use super::context::OpContext;
use super::report::OperationReport;

fn package_manager(ctx: &OpContext<'_>, args: &[&str]) -> CommandSpec {
    let pm = ctx.tools().package_manager.as_str();
    CommandSpec::new(std::iter::once(pm).chain(args.iter().copied()))
}

fn with_packages(spec_args: &[&str], packages: &[String]) -> Vec<String> {
    spec_args
        .iter()
        .map(|s| s.to_string())
        .chain(packages.iter().cloned())
        .collect()
}

fn update_spec(ctx: &OpContext<'_>) -> CommandSpec {
    package_manager(ctx, &["update"]).with_description("Updating package list")
}

fn install_spec(ctx: &OpContext<'_>, packages: &[String]) -> CommandSpec {
    let pm = ctx.tools().package_manager.as_str();
    CommandSpec::new(with_packages(&[pm, "install", "-y"], packages))
        .with_description(format!("Installing package(s): {}", packages.join(" ")))
}

/// `apt update`
pub fn update(ctx: &mut OpContext<'_>) -> OperationReport {
    let mut report = OperationReport::new("update");
    ctx.ui.show_header("Update");
    let spec = update_spec(ctx);
    ctx.run_checked(&spec, &mut report);
    report
}

/// `apt full-upgrade -y`. Streams to the terminal since it can run long.
pub fn upgrade(ctx: &mut OpContext<'_>) -> OperationReport {
    let mut report = OperationReport::new("upgrade");
    ctx.ui.show_header("Upgrade");
    let spec = package_manager(ctx, &["full-upgrade", "-y"])
        .with_description("Upgrading system packages")
        .inherit();
    ctx.run_checked(&spec, &mut report);
    report
}

/// `apt install -y <packages>`
pub fn install(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("install");
    ctx.ui.show_header("Install");
    let spec = install_spec(ctx, packages);
    ctx.run_checked(&spec, &mut report);
    report
}

/// Update the package list, then install. Nothing is installed if the
/// update fails.
pub fn auto_install(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("auto-install");
    ctx.ui.show_header("Auto-install");
    ctx.ui
        .message(&format!("Auto-installing package(s): {}", packages.join(" ")));

    let update = update_spec(ctx);
    if !ctx.run_checked(&update, &mut report) {
        ctx.ui.warning("Skipping install because the update failed");
        return report;
    }

    let spec = install_spec(ctx, packages);
    ctx.run_checked(&spec, &mut report);
    report
}

/// `apt remove -y <packages>`
pub fn remove(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("remove");
    ctx.ui.show_header("Remove");
    let pm = ctx.tools().package_manager.as_str();
    let spec = CommandSpec::new(with_packages(&[pm, "remove", "-y"], packages))
        .with_description(format!("Removing package(s): {}", packages.join(" ")));
    ctx.run_checked(&spec, &mut report);
    report
}

/// `apt autoremove -y`
pub fn autoremove(ctx: &mut OpContext<'_>) -> OperationReport {
    let mut report = OperationReport::new("autoremove");
    ctx.ui.show_header("Autoremove");
    let spec = package_manager(ctx, &["autoremove", "-y"])
        .with_description("Autoremoving unnecessary packages");
    ctx.run_checked(&spec, &mut report);
    report
}

/// `apt autoclean`
pub fn autoclean(ctx: &mut OpContext<'_>) -> OperationReport {
    let mut report = OperationReport::new("autoclean");
    ctx.ui.show_header("Autoclean");
    let spec = package_manager(ctx, &["autoclean"])
        .with_description("Autocleaning package cache");
    ctx.run_checked(&spec, &mut report);
    report
}

/// `snap install <packages>`
pub fn install_snap(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("install-snap");
    ctx.ui.show_header("Snap");
    let spec = CommandSpec::new(with_packages(&["snap", "install"], packages))
        .with_description(format!("Installing snap package(s): {}", packages.join(" ")));
    ctx.run_checked(&spec, &mut report);
    report
}

/// `flatpak install -y <packages>`
pub fn install_flatpak(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("install-flatpak");
    ctx.ui.show_header("Flatpak");
    let spec = CommandSpec::new(with_packages(&["flatpak", "install", "-y"], packages))
        .with_description(format!(
            "Installing flatpak package(s): {}",
            packages.join(" ")
        ));
    ctx.run_checked(&spec, &mut report);
    report
}

/// `pip3 install <packages>`
pub fn install_pip(ctx: &mut OpContext<'_>, packages: &[String]) -> OperationReport {
    let mut report = OperationReport::new("install-pip");
    ctx.ui.show_header("Pip");
    let pip = ctx.tools().pip.as_str();
    let spec = CommandSpec::new(with_packages(&[pip, "install"], packages))
        .with_description(format!(
            "Installing Python package(s): {}",
            packages.join(" ")
        ))
        .inherit();
    ctx.run_checked(&spec, &mut report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FcpConfig;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;

    fn pkgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn with_ctx<F>(runner: &mut RecordingRunner, f: F) -> (OperationReport, MockUI)
    where
        F: FnOnce(&mut OpContext<'_>) -> OperationReport,
    {
        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let report = {
            let mut ctx = OpContext::new(runner, &mut ui, &config);
            f(&mut ctx)
        };
        (report, ui)
    }

    #[test]
    fn update_runs_apt_update() {
        let mut runner = RecordingRunner::new();
        let (report, ui) = with_ctx(&mut runner, update);

        assert_eq!(runner.commands(), vec!["apt update"]);
        assert!(report.success);
        assert_eq!(report.name, "update");
        assert_eq!(ui.headers(), &["Update".to_string()]);
    }

    #[test]
    fn upgrade_inherits_terminal() {
        let mut runner = RecordingRunner::new();
        let (report, _) = with_ctx(&mut runner, upgrade);

        assert_eq!(runner.commands(), vec!["apt full-upgrade -y"]);
        assert_eq!(runner.specs()[0].capture(), crate::shell::CaptureMode::Inherit);
        assert!(report.success);
    }

    #[test]
    fn install_passes_all_packages() {
        let mut runner = RecordingRunner::new();
        let packages = pkgs(&["vim", "htop"]);
        let (report, _) = with_ctx(&mut runner, |ctx| install(ctx, &packages));

        assert_eq!(runner.commands(), vec!["apt install -y vim htop"]);
        assert!(report.success);
    }

    #[test]
    fn install_failure_is_reported() {
        let mut runner = RecordingRunner::new();
        runner.fail("apt install", 100);
        let packages = pkgs(&["nope"]);
        let (report, ui) = with_ctx(&mut runner, |ctx| install(ctx, &packages));

        assert!(!report.success);
        assert_eq!(ui.error_blocks().len(), 1);
    }

    #[test]
    fn auto_install_updates_then_installs() {
        let mut runner = RecordingRunner::new();
        let packages = pkgs(&["git"]);
        let (report, _) = with_ctx(&mut runner, |ctx| auto_install(ctx, &packages));

        assert_eq!(runner.commands(), vec!["apt update", "apt install -y git"]);
        assert!(report.success);
    }

    #[test]
    fn auto_install_stops_when_update_fails() {
        let mut runner = RecordingRunner::new();
        runner.fail("apt update", 100);
        let packages = pkgs(&["git"]);
        let (report, ui) = with_ctx(&mut runner, |ctx| auto_install(ctx, &packages));

        assert_eq!(runner.commands(), vec!["apt update"]);
        assert!(!report.success);
        assert!(ui.has_warning("update failed"));
    }

    #[test]
    fn remove_autoremove_autoclean() {
        let mut runner = RecordingRunner::new();
        let packages = pkgs(&["nano"]);
        with_ctx(&mut runner, |ctx| remove(ctx, &packages));
        with_ctx(&mut runner, autoremove);
        with_ctx(&mut runner, autoclean);

        assert_eq!(
            runner.commands(),
            vec!["apt remove -y nano", "apt autoremove -y", "apt autoclean"]
        );
    }

    #[test]
    fn snap_flatpak_pip() {
        let mut runner = RecordingRunner::new();
        let snap = pkgs(&["code"]);
        let flatpak = pkgs(&["org.gimp.GIMP"]);
        let pip = pkgs(&["requests", "rich"]);
        with_ctx(&mut runner, |ctx| install_snap(ctx, &snap));
        with_ctx(&mut runner, |ctx| install_flatpak(ctx, &flatpak));
        with_ctx(&mut runner, |ctx| install_pip(ctx, &pip));

        assert_eq!(
            runner.commands(),
            vec![
                "snap install code",
                "flatpak install -y org.gimp.GIMP",
                "pip3 install requests rich",
            ]
        );
    }

    #[test]
    fn configured_package_manager_is_used() {
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let mut config = FcpConfig::default();
        config.tools.package_manager = "apt-get".into();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);
        update(&mut ctx);

        assert_eq!(runner.commands(), vec!["apt-get update"]);
    }
}
