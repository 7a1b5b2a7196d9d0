//! Git checkouts: `--github` and `--github-install`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::install::probe;
use crate::shell::CommandSpec;
use crate::ui::hints;

use super::context::OpContext;
use super::files::path_arg;
use super::report::OperationReport;

/// Repository name from a clone URL: trailing `/` and `.git` removed, then
/// the last path segment.
pub fn repo_name(url: &str) -> String {
    let mut trimmed = url.trim_end_matches('/');
    if let Some(stripped) = trimmed.strip_suffix(".git") {
        trimmed = stripped.trim_end_matches('/');
    }
    trimmed
        .rsplit(|c: char| c == '/' || c == ':')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

fn checkout_path(ctx: &OpContext<'_>, url: &str) -> PathBuf {
    ctx.config.settings.github_dir.join(repo_name(url))
}

fn clone_spec(ctx: &OpContext<'_>, url: &str, target: &Path) -> CommandSpec {
    CommandSpec::new([
        ctx.tools().git.clone(),
        "clone".to_string(),
        url.to_string(),
        path_arg(target),
    ])
    .with_description(format!("Cloning repository: {}", repo_name(url)))
    .inherit()
}

fn prepare_github_dir(ctx: &mut OpContext<'_>, report: &mut OperationReport) -> bool {
    let dir = ctx.config.settings.github_dir.clone();
    match ctx.ensure_dir(&dir) {
        Ok(()) => true,
        Err(e) => {
            ctx.ui
                .error(&format!("Could not create {}: {}", dir.display(), e));
            report.fail(e.to_string());
            false
        }
    }
}

/// Clone each URL into the checkout directory. Existing checkouts are
/// skipped with a warning and do not fail the operation.
pub fn github(ctx: &mut OpContext<'_>, urls: &[String]) -> OperationReport {
    let mut report = OperationReport::new("github");
    ctx.ui.show_header("GitHub clone");
    if !prepare_github_dir(ctx, &mut report) {
        return report;
    }

    for url in urls {
        let target = checkout_path(ctx, url);
        if target.exists() {
            ctx.ui.warning(&format!(
                "Repository '{}' already exists. Skipping clone.",
                repo_name(url)
            ));
            ctx.ui
                .show_hint(&hints::existing_checkout(&target.display().to_string()));
            continue;
        }

        let spec = clone_spec(ctx, url, &target);
        if ctx.run_checked(&spec, &mut report) {
            ctx.ui
                .message(&format!("Repository cloned to: {}", target.display()));
        }
    }
    report
}

/// Clone (or pull, if already present) each URL, then install the checkout
/// from source.
pub fn github_install(ctx: &mut OpContext<'_>, urls: &[String]) -> OperationReport {
    let mut report = OperationReport::new("github-install");
    ctx.ui.show_header("GitHub install");
    if !prepare_github_dir(ctx, &mut report) {
        return report;
    }

    for url in urls {
        let name = repo_name(url);
        let target = checkout_path(ctx, url);

        let fetched = if target.exists() {
            let spec = CommandSpec::new([ctx.tools().git.as_str(), "pull"])
                .with_cwd(&target)
                .with_description(format!("Updating repository: {}", name))
                .inherit();
            ctx.run_checked(&spec, &mut report)
        } else {
            let spec = clone_spec(ctx, url, &target);
            ctx.run_checked(&spec, &mut report)
        };

        if !fetched {
            debug!(url, "fetch failed, not installing");
            continue;
        }
        if ctx.dry_run && !target.is_dir() {
            ctx.ui.message(&format!(
                "Would install {} from source after cloning",
                name
            ));
            continue;
        }

        ctx.ui.message(&format!("Attempting to install {}", name));
        match probe(ctx, &target) {
            Ok(outcome) if outcome.success => {
                ctx.ui.success(&format!("Successfully installed {}", name));
            }
            Ok(outcome) => {
                report.fail(format!("{}: {} install failed", name, outcome.method));
                could_not_install(ctx, &name, &target);
            }
            Err(e) => {
                report.fail(format!("{}: {}", name, e));
                ctx.ui.error(&e.to_string());
                could_not_install(ctx, &name, &target);
            }
        }
    }
    report
}

fn could_not_install(ctx: &mut OpContext<'_>, name: &str, target: &Path) {
    ctx.ui.error(&format!("Could not auto-install {}", name));
    ctx.ui
        .show_hint(&hints::manual_install(&target.display().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FcpConfig;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> FcpConfig {
        let mut config = FcpConfig::default();
        config.settings.github_dir = dir.to_path_buf();
        config
    }

    #[test]
    fn repo_name_strips_suffixes() {
        assert_eq!(repo_name("https://github.com/user/tool.git"), "tool");
        assert_eq!(repo_name("https://github.com/user/tool/"), "tool");
        assert_eq!(repo_name("https://github.com/user/tool.git/"), "tool");
        assert_eq!(repo_name("https://github.com/user/tool"), "tool");
        assert_eq!(repo_name("git@github.com:user/tool.git"), "tool");
        assert_eq!(repo_name("tool"), "tool");
    }

    #[test]
    fn github_clones_into_github_dir() {
        let temp = TempDir::new().unwrap();
        let repos = temp.path().join("repos");
        let config = config_in(&repos);
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github(&mut ctx, &["https://github.com/user/tool.git".into()]);

        assert!(report.success);
        assert!(repos.is_dir());
        assert_eq!(
            runner.commands(),
            vec![format!(
                "git clone https://github.com/user/tool.git {}",
                repos.join("tool").display()
            )]
        );
    }

    #[test]
    fn github_skips_existing_checkout() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("second")).unwrap();
        let config = config_in(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github(
            &mut ctx,
            &[
                "https://github.com/user/first".into(),
                "https://github.com/user/second.git".into(),
            ],
        );

        assert!(report.success);
        assert_eq!(runner.count(), 1);
        assert!(runner.commands()[0].contains("/first"));
        assert!(ui.has_warning("'second' already exists"));
        assert!(ui.has_hint("--github-install"));
    }

    #[test]
    fn github_clone_failure_fails_report() {
        let temp = TempDir::new().unwrap();
        let config = config_in(temp.path());
        let mut runner = RecordingRunner::new();
        runner.fail("git clone", 128);
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github(&mut ctx, &["https://github.com/user/tool".into()]);
        assert!(!report.success);
    }

    #[test]
    fn github_install_pulls_existing_and_probes() {
        let temp = TempDir::new().unwrap();
        let checkout = temp.path().join("tool");
        fs::create_dir(&checkout).unwrap();
        fs::write(checkout.join("setup.py"), "").unwrap();
        let config = config_in(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github_install(&mut ctx, &["https://github.com/user/tool".into()]);

        assert!(report.success);
        assert_eq!(
            runner.commands(),
            vec!["git pull", "python3 setup.py install"]
        );
        assert_eq!(runner.specs()[0].cwd(), Some(checkout.as_path()));
        assert!(ui.has_success("Successfully installed tool"));
    }

    #[test]
    fn github_install_probe_failure_counts() {
        let temp = TempDir::new().unwrap();
        let checkout = temp.path().join("tool");
        fs::create_dir(&checkout).unwrap();
        fs::write(checkout.join("README.md"), "").unwrap();
        let config = config_in(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github_install(&mut ctx, &["https://github.com/user/tool".into()]);

        assert!(!report.success);
        assert!(report.failures[0].contains("No install method found"));
        assert!(ui.has_error("Could not auto-install tool"));
        assert!(ui.has_hint("Install it manually"));
    }

    #[test]
    fn github_install_failed_clone_skips_probe() {
        let temp = TempDir::new().unwrap();
        let config = config_in(temp.path());
        let mut runner = RecordingRunner::new();
        runner.fail("git clone", 128);
        let mut ui = MockUI::new();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);

        let report = github_install(&mut ctx, &["https://github.com/user/tool".into()]);

        assert!(!report.success);
        assert_eq!(runner.count(), 1);
    }
}
