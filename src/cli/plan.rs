//! Turning parsed flags into an ordered list of operations.

use std::path::PathBuf;

use super::args::Cli;

/// One requested operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Update,
    Upgrade,
    Install(Vec<String>),
    AutoInstall(Vec<String>),
    Remove(Vec<String>),
    Autoremove,
    Autoclean,
    Chmod(Vec<PathBuf>),
    InstallDeb(Vec<PathBuf>),
    InstallSnap(Vec<String>),
    InstallFlatpak(Vec<String>),
    InstallPip(Vec<String>),
    Github(Vec<String>),
    GithubInstall(Vec<String>),
    Download(Vec<String>),
    InstallSource(Vec<PathBuf>),
    Shutdown,
}

impl Operation {
    /// Flag name without dashes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Upgrade => "upgrade",
            Self::Install(_) => "install",
            Self::AutoInstall(_) => "auto-install",
            Self::Remove(_) => "remove",
            Self::Autoremove => "autoremove",
            Self::Autoclean => "autoclean",
            Self::Chmod(_) => "chmod",
            Self::InstallDeb(_) => "install-deb",
            Self::InstallSnap(_) => "install-snap",
            Self::InstallFlatpak(_) => "install-flatpak",
            Self::InstallPip(_) => "install-pip",
            Self::Github(_) => "github",
            Self::GithubInstall(_) => "github-install",
            Self::Download(_) => "download",
            Self::InstallSource(_) => "install-source",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Operations requested by `cli`, in execution order.
///
/// The order is fixed regardless of how the flags were typed; shutdown is
/// always last.
pub fn plan(cli: &Cli) -> Vec<Operation> {
    let mut ops = Vec::new();

    if cli.update {
        ops.push(Operation::Update);
    }
    if cli.upgrade {
        ops.push(Operation::Upgrade);
    }
    push_list(&mut ops, &cli.install, Operation::Install);
    push_list(&mut ops, &cli.auto_install, Operation::AutoInstall);
    push_list(&mut ops, &cli.remove, Operation::Remove);
    if cli.autoremove {
        ops.push(Operation::Autoremove);
    }
    if cli.autoclean {
        ops.push(Operation::Autoclean);
    }
    if !cli.chmod.is_empty() {
        ops.push(Operation::Chmod(cli.chmod.clone()));
    }
    if !cli.install_deb.is_empty() {
        ops.push(Operation::InstallDeb(cli.install_deb.clone()));
    }
    push_list(&mut ops, &cli.install_snap, Operation::InstallSnap);
    push_list(&mut ops, &cli.install_flatpak, Operation::InstallFlatpak);
    push_list(&mut ops, &cli.install_pip, Operation::InstallPip);
    push_list(&mut ops, &cli.github, Operation::Github);
    push_list(&mut ops, &cli.github_install, Operation::GithubInstall);
    push_list(&mut ops, &cli.download, Operation::Download);
    if !cli.install_source.is_empty() {
        ops.push(Operation::InstallSource(cli.install_source.clone()));
    }
    if cli.shutdown {
        ops.push(Operation::Shutdown);
    }

    ops
}

fn push_list(ops: &mut Vec<Operation>, items: &[String], make: fn(Vec<String>) -> Operation) {
    if !items.is_empty() {
        ops.push(make(items.to_vec()));
    }
}
