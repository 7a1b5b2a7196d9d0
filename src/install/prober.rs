//! Source-install prober.
//!
//! Given a checkout or source directory, installs its Python requirements
//! (best effort), picks the first install method whose marker is present,
//! and runs that method's plan step by step.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{FcpError, Result};
use crate::ops::OpContext;
use crate::ui::hints;

use super::markers::{detect_method, has_requirements, list_entries};
use super::method::InstallMethod;

/// What a probe did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The method that was attempted.
    pub method: InstallMethod,

    /// Whether every step of the method succeeded.
    pub success: bool,

    /// Outcome of the requirements step, if one ran.
    pub prereqs: Option<bool>,
}

/// Install the project in `dir`.
///
/// Returns `Err` when no install method could be attempted: the path is
/// missing or not a directory, no marker matched, or the build directory
/// could not be created. `requirements.txt` is installed before detection,
/// so it still runs when no marker matches.
/// A method that ran and failed is `Ok` with `success == false`.
pub fn probe(ctx: &mut OpContext<'_>, dir: &Path) -> Result<ProbeOutcome> {
    if !dir.exists() {
        return Err(FcpError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FcpError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let prereqs = if has_requirements(dir) {
        Some(install_prereqs(ctx, dir))
    } else {
        None
    };

    let method = match detect_method(dir) {
        Some(method) => method,
        None => {
            let entries = list_entries(dir)?;
            debug!(dir = %dir.display(), ?entries, "no install marker");
            return Err(FcpError::NoInstallMethodFound {
                path: dir.to_path_buf(),
                entries,
            });
        }
    };

    ctx.ui.message(&format!("Found {}, installing with it", method));
    debug!(dir = %dir.display(), %method, markers = ?method.markers(), "selected install method");

    let plan = method.plan(dir, ctx.tools());
    if let Some(build_dir) = &plan.build_dir {
        ctx.ensure_dir(build_dir)?;
    }

    let elevate = ctx.tools().elevate.clone();
    let mut success = true;
    for step in &plan.steps {
        if !ctx.run(step).success {
            if elevate.as_deref() == Some(step.program()) {
                ctx.ui.show_hint(hints::elevated_install_failed());
            }
            success = false;
            break;
        }
    }

    Ok(ProbeOutcome {
        method,
        success,
        prereqs,
    })
}

fn install_prereqs(ctx: &mut OpContext<'_>, dir: &Path) -> bool {
    let plan = InstallMethod::PackagePrereqs.plan(dir, ctx.tools());
    let mut ok = true;
    for step in &plan.steps {
        ok &= ctx.run(step).success;
    }
    if !ok {
        warn!(dir = %dir.display(), "requirements install failed");
        ctx.ui
            .warning("Installing requirements.txt failed; continuing with the install");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FcpConfig;
    use crate::shell::{CommandResult, RecordingRunner};
    use crate::ui::MockUI;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for f in files {
            fs::write(temp.path().join(f), "").unwrap();
        }
        temp
    }

    fn run_probe(runner: &mut RecordingRunner, dir: &Path) -> Result<ProbeOutcome> {
        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let mut ctx = OpContext::new(runner, &mut ui, &config);
        probe(&mut ctx, dir)
    }

    #[test]
    fn setup_py_runs_only_setup() {
        let temp = dir_with(&["setup.py"]);
        let mut runner = RecordingRunner::new();
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(runner.commands(), vec!["python3 setup.py install"]);
        assert_eq!(outcome.method, InstallMethod::PythonSetup);
        assert!(outcome.success);
        assert_eq!(outcome.prereqs, None);
    }

    #[test]
    fn makefile_success_depends_on_make_install() {
        let temp = dir_with(&["Makefile"]);
        let mut runner = RecordingRunner::new();
        runner.fail("sudo make install", 2);
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(runner.commands(), vec!["make", "sudo make install"]);
        assert!(!outcome.success);
    }

    #[test]
    fn failed_elevated_step_shows_hint() {
        let temp = dir_with(&["Makefile"]);
        let mut runner = RecordingRunner::new();
        runner.fail("sudo make install", 1);
        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);
        probe(&mut ctx, temp.path()).unwrap();

        assert!(ui.has_hint("root"));
    }

    #[test]
    fn failed_make_stops_before_install() {
        let temp = dir_with(&["Makefile"]);
        let mut runner = RecordingRunner::new();
        runner.fail("make", 2);
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(runner.commands(), vec!["make"]);
        assert!(!outcome.success);
    }

    #[test]
    fn makefile_and_cmake_only_uses_makefile() {
        let temp = dir_with(&["Makefile", "CMakeLists.txt"]);
        let mut runner = RecordingRunner::new();
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(outcome.method, InstallMethod::MakeBuild);
        assert!(!runner.ran("cmake"));
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn cmake_creates_build_dir_and_gates_steps() {
        let temp = dir_with(&["CMakeLists.txt"]);
        let mut runner = RecordingRunner::new();
        runner.fail("cmake", 1);
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert!(temp.path().join("build").is_dir());
        assert_eq!(runner.commands(), vec!["cmake .."]);
        assert_eq!(runner.specs()[0].cwd(), Some(temp.path().join("build").as_path()));
        assert!(!outcome.success);
    }

    #[test]
    fn cmake_runs_three_steps_on_success() {
        let temp = dir_with(&["CMakeLists.txt"]);
        fs::create_dir(temp.path().join("build")).unwrap();
        let mut runner = RecordingRunner::new();
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(
            runner.commands(),
            vec!["cmake ..", "make", "sudo make install"]
        );
        assert!(outcome.success);
    }

    #[test]
    fn install_sh_runs_exactly_two_commands() {
        let temp = dir_with(&["install.sh"]);
        let mut runner = RecordingRunner::new();
        runner.fail("bash install.sh", 7);
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(runner.count(), 2);
        assert_eq!(
            runner.commands(),
            vec!["chmod +x install.sh", "bash install.sh"]
        );
        assert!(!outcome.success);
    }

    #[test]
    fn no_marker_lists_entries_and_runs_nothing() {
        let temp = dir_with(&["README.md", "LICENSE"]);
        let mut runner = RecordingRunner::new();
        let err = run_probe(&mut runner, temp.path()).unwrap_err();

        assert_eq!(runner.count(), 0);
        match err {
            FcpError::NoInstallMethodFound { entries, .. } => {
                assert_eq!(entries, vec!["LICENSE", "README.md"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn requirements_alone_installs_them_then_fails() {
        let temp = dir_with(&["requirements.txt"]);
        let mut runner = RecordingRunner::new();
        let err = run_probe(&mut runner, temp.path()).unwrap_err();

        assert_eq!(runner.commands(), vec!["pip3 install -r requirements.txt"]);
        match err {
            FcpError::NoInstallMethodFound { entries, .. } => {
                assert_eq!(entries, vec!["requirements.txt"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_instead_of_directory_is_not_a_directory() {
        let temp = dir_with(&["setup.py"]);
        let mut runner = RecordingRunner::new();
        let err = run_probe(&mut runner, &temp.path().join("setup.py")).unwrap_err();

        assert!(matches!(err, FcpError::NotADirectory { .. }));
        assert!(err.to_string().contains("Not a directory"));
        assert_eq!(runner.count(), 0);
    }

    #[test]
    fn requirements_run_first_and_do_not_decide_the_result() {
        let temp = dir_with(&["requirements.txt", "setup.py"]);
        let mut runner = RecordingRunner::new();
        runner.fail("pip3 install", 1);

        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);
        let outcome = probe(&mut ctx, temp.path()).unwrap();

        assert_eq!(
            runner.commands(),
            vec!["pip3 install -r requirements.txt", "python3 setup.py install"]
        );
        assert_eq!(outcome.prereqs, Some(false));
        assert!(outcome.success);
        assert!(ui.has_warning("requirements.txt"));
    }

    #[test]
    fn successful_requirements_do_not_rescue_failed_method() {
        let temp = dir_with(&["requirements.txt", "build.py"]);
        let mut runner = RecordingRunner::new();
        runner.respond(
            "python3 build.py",
            CommandResult::failure(Some(1), None, None, Duration::ZERO),
        );
        let outcome = run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(outcome.prereqs, Some(true));
        assert!(!outcome.success);
    }

    #[test]
    fn extensionless_install_runs_from_its_directory() {
        let temp = dir_with(&["install"]);
        let mut runner = RecordingRunner::new();
        run_probe(&mut runner, temp.path()).unwrap();

        assert_eq!(runner.count(), 2);
        assert_eq!(runner.commands()[0], "chmod +x install");
        assert_eq!(runner.specs()[1].program(), "./install");
        assert_eq!(runner.specs()[1].cwd(), Some(temp.path()));
    }

    #[test]
    fn missing_directory_is_path_not_found() {
        let temp = TempDir::new().unwrap();
        let mut runner = RecordingRunner::new();
        let err = run_probe(&mut runner, &temp.path().join("nope")).unwrap_err();

        assert!(matches!(err, FcpError::PathNotFound { .. }));
        assert_eq!(runner.count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn extensionless_install_runs_from_relative_directory() {
        use crate::shell::SystemRunner;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new_in(".").unwrap();
        let rel = Path::new(".").join(temp.path().file_name().unwrap());
        let script = rel.join("install");
        fs::write(&script, "#!/bin/sh\ntouch installed\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let mut runner = SystemRunner::new();
        let mut ui = MockUI::new();
        let config = FcpConfig::default();
        let mut ctx = OpContext::new(&mut runner, &mut ui, &config);
        let outcome = probe(&mut ctx, &rel).unwrap();

        assert_eq!(outcome.method, InstallMethod::NamedScript("install".into()));
        assert!(outcome.success);
        assert!(rel.join("installed").exists());
    }
}
