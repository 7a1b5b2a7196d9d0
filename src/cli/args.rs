//! CLI argument definitions.
//!
//! Every operation is a flat flag; any subset may be combined. The order
//! they run in is fixed by [`plan`](super::plan::plan), not by the order they
//! were typed.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// fcp - fast command prompt for package, repository and download chores.
#[derive(Debug, Default, Parser)]
#[command(name = "fcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Update package list (apt update)
    #[arg(long, visible_alias = "ud")]
    pub update: bool,

    /// Upgrade system packages (apt full-upgrade -y)
    #[arg(long, visible_alias = "ug")]
    pub upgrade: bool,

    /// Install package(s) (apt install)
    #[arg(short, long, num_args = 1.., value_name = "PACKAGE")]
    pub install: Vec<String>,

    /// Update first, then install package(s)
    #[arg(long, visible_alias = "auto", num_args = 1.., value_name = "PACKAGE")]
    pub auto_install: Vec<String>,

    /// Remove package(s) (apt remove)
    #[arg(short, long, num_args = 1.., value_name = "PACKAGE")]
    pub remove: Vec<String>,

    /// Remove unneeded packages (apt autoremove)
    #[arg(long, visible_alias = "ar")]
    pub autoremove: bool,

    /// Clear out the package cache (apt autoclean)
    #[arg(long, visible_alias = "ac")]
    pub autoclean: bool,

    /// Make file(s) executable (chmod +x)
    #[arg(long, visible_alias = "ch", num_args = 1.., value_name = "FILE")]
    pub chmod: Vec<PathBuf>,

    /// Install .deb package(s) (dpkg -i)
    #[arg(long, visible_alias = "deb", num_args = 1.., value_name = "FILE")]
    pub install_deb: Vec<PathBuf>,

    /// Install snap package(s) (snap install)
    #[arg(long, visible_alias = "snap", num_args = 1.., value_name = "PACKAGE")]
    pub install_snap: Vec<String>,

    /// Install flatpak package(s) (flatpak install)
    #[arg(long, visible_alias = "flatpak", num_args = 1.., value_name = "PACKAGE")]
    pub install_flatpak: Vec<String>,

    /// Install Python package(s) (pip install)
    #[arg(long, visible_alias = "pip", num_args = 1.., value_name = "PACKAGE")]
    pub install_pip: Vec<String>,

    /// Clone repository(ies) (git clone)
    #[arg(long, visible_alias = "gh", num_args = 1.., value_name = "URL")]
    pub github: Vec<String>,

    /// Clone or update repository(ies), then install from source
    #[arg(long, visible_alias = "gh-install", num_args = 1.., value_name = "URL")]
    pub github_install: Vec<String>,

    /// Download file(s) (wget, or curl)
    #[arg(long, visible_alias = "dl", num_args = 1.., value_name = "URL")]
    pub download: Vec<String>,

    /// Install from source directory(ies)
    #[arg(long, visible_alias = "src", num_args = 1.., value_name = "PATH")]
    pub install_source: Vec<PathBuf>,

    /// Shut the system down after everything else
    #[arg(long, visible_alias = "sh")]
    pub shutdown: bool,

    /// Directory for cloned repositories [default: ./repos]
    #[arg(long, visible_alias = "gh-dir", env = "FCP_GITHUB_DIR", value_name = "DIR")]
    pub github_dir: Option<PathBuf>,

    /// Directory for downloads [default: ./downloads]
    #[arg(long, visible_alias = "dl-dir", env = "FCP_DOWNLOAD_DIR", value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Path to config file (overrides ~/.config/fcp/config.yml)
    #[arg(short, long, env = "FCP_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Whether any operation flag was given. Directory, config and output
    /// flags do not count.
    pub fn has_operations(&self) -> bool {
        self.update
            || self.upgrade
            || !self.install.is_empty()
            || !self.auto_install.is_empty()
            || !self.remove.is_empty()
            || self.autoremove
            || self.autoclean
            || !self.chmod.is_empty()
            || !self.install_deb.is_empty()
            || !self.install_snap.is_empty()
            || !self.install_flatpak.is_empty()
            || !self.install_pip.is_empty()
            || !self.github.is_empty()
            || !self.github_install.is_empty()
            || !self.download.is_empty()
            || !self.install_source.is_empty()
            || self.shutdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fcp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_operations() {
        assert!(!parse(&[]).has_operations());
        assert!(!parse(&["--gh-dir", "/tmp/r", "-v", "--dry-run"]).has_operations());
    }

    #[test]
    fn aliases_are_accepted() {
        let cli = parse(&["--ud", "--ug", "--ar", "--ac", "--sh"]);
        assert!(cli.update && cli.upgrade && cli.autoremove && cli.autoclean && cli.shutdown);
        assert!(cli.has_operations());
    }

    #[test]
    fn multi_value_flags_collect_until_next_flag() {
        let cli = parse(&["-i", "vim", "htop", "--pip", "requests", "--ud"]);
        assert_eq!(cli.install, vec!["vim", "htop"]);
        assert_eq!(cli.install_pip, vec!["requests"]);
        assert!(cli.update);
    }

    #[test]
    fn path_flags_parse() {
        let cli = parse(&["--src", "./a", "./b", "--deb", "x.deb", "--ch", "run.sh"]);
        assert_eq!(cli.install_source, vec![PathBuf::from("./a"), PathBuf::from("./b")]);
        assert_eq!(cli.install_deb, vec![PathBuf::from("x.deb")]);
        assert_eq!(cli.chmod, vec![PathBuf::from("run.sh")]);
    }

    #[test]
    fn install_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["fcp", "--install"]).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["fcp", "--frobnicate"]).is_err());
    }

    #[test]
    fn completions_parse_shell() {
        let cli = parse(&["--completions", "bash"]);
        assert_eq!(cli.completions, Some(Shell::Bash));
    }
}
