//! Install methods and the commands each one runs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Tools;
use crate::shell::CommandSpec;

use super::markers::{CMAKE_LISTS, INSTALL_SH, MAKEFILES, REQUIREMENTS, SETUP_PY};

/// A build/install convention recognised by its marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// `requirements.txt`: best-effort dependency install before any method.
    PackagePrereqs,
    /// `setup.py`
    PythonSetup,
    /// `Makefile` (or `GNUmakefile`, `makefile`)
    MakeBuild,
    /// `CMakeLists.txt`, built out of tree in `build/`
    CMakeBuild,
    /// `install.sh`
    ShellInstallScript,
    /// One of the conventional script names, e.g. `build.py`
    NamedScript(String),
}

impl InstallMethod {
    /// Marker file names for this method.
    pub fn markers(&self) -> Vec<&str> {
        match self {
            Self::PackagePrereqs => vec![REQUIREMENTS],
            Self::PythonSetup => vec![SETUP_PY],
            Self::MakeBuild => MAKEFILES.to_vec(),
            Self::CMakeBuild => vec![CMAKE_LISTS],
            Self::ShellInstallScript => vec![INSTALL_SH],
            Self::NamedScript(name) => vec![name.as_str()],
        }
    }

    /// Commands to run for this method in `dir`, in order.
    pub fn plan(&self, dir: &Path, tools: &Tools) -> InstallPlan {
        match self {
            Self::PackagePrereqs => InstallPlan::new(vec![CommandSpec::new([
                tools.pip.as_str(),
                "install",
                "-r",
                REQUIREMENTS,
            ])
            .with_cwd(dir)
            .with_description("Installing Python requirements")
            .inherit()]),

            Self::PythonSetup => InstallPlan::new(vec![CommandSpec::new([
                tools.python.as_str(),
                SETUP_PY,
                "install",
            ])
            .with_cwd(dir)
            .with_description("Installing from setup.py")
            .inherit()]),

            Self::MakeBuild => InstallPlan::new(vec![
                CommandSpec::new(["make"])
                    .with_cwd(dir)
                    .with_description("Building with make")
                    .inherit(),
                CommandSpec::new(elevated(tools, ["make", "install"]))
                    .with_cwd(dir)
                    .with_description("Running make install")
                    .inherit(),
            ]),

            Self::CMakeBuild => {
                let build_dir = dir.join("build");
                InstallPlan::new(vec![
                    CommandSpec::new(["cmake", ".."])
                        .with_cwd(&build_dir)
                        .with_description("Configuring with CMake")
                        .inherit(),
                    CommandSpec::new(["make"])
                        .with_cwd(&build_dir)
                        .with_description("Building with make")
                        .inherit(),
                    CommandSpec::new(elevated(tools, ["make", "install"]))
                        .with_cwd(&build_dir)
                        .with_description("Running make install")
                        .inherit(),
                ])
                .with_build_dir(build_dir)
            }

            Self::ShellInstallScript => {
                InstallPlan::new(vec![chmod_x(dir, INSTALL_SH), shell_script(dir, tools, INSTALL_SH)])
            }

            Self::NamedScript(name) => {
                let steps = if name.ends_with(".sh") {
                    vec![chmod_x(dir, name), shell_script(dir, tools, name)]
                } else if name.ends_with(".py") {
                    vec![CommandSpec::new([tools.python.as_str(), name.as_str()])
                        .with_cwd(dir)
                        .with_description(format!("Running {}", name))
                        .inherit()]
                } else {
                    // No extension: run the file itself so its shebang decides.
                    // The path is relative to the child's cwd.
                    vec![
                        chmod_x(dir, name),
                        CommandSpec::new([format!("./{}", name)])
                            .with_cwd(dir)
                            .with_description(format!("Running {}", name))
                            .inherit(),
                    ]
                };
                InstallPlan::new(steps)
            }
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackagePrereqs => write!(f, "Python requirements"),
            Self::PythonSetup => write!(f, "setup.py"),
            Self::MakeBuild => write!(f, "Makefile"),
            Self::CMakeBuild => write!(f, "CMake"),
            Self::ShellInstallScript => write!(f, "install.sh"),
            Self::NamedScript(name) => write!(f, "{}", name),
        }
    }
}

/// Ordered commands for one method. Each step runs only if the previous
/// one succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Directory to create (if absent) before the first step.
    pub build_dir: Option<PathBuf>,

    pub steps: Vec<CommandSpec>,
}

impl InstallPlan {
    fn new(steps: Vec<CommandSpec>) -> Self {
        Self {
            build_dir: None,
            steps,
        }
    }

    fn with_build_dir(mut self, dir: PathBuf) -> Self {
        self.build_dir = Some(dir);
        self
    }

    /// Command lines, for display and tests.
    pub fn command_lines(&self) -> Vec<String> {
        self.steps.iter().map(CommandSpec::display).collect()
    }
}

/// Prefix `args` with the configured elevation tool, if any.
pub fn elevated<I, S>(tools: &Tools, args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tools
        .elevate
        .iter()
        .cloned()
        .chain(args.into_iter().map(Into::into))
        .collect()
}

fn chmod_x(dir: &Path, name: &str) -> CommandSpec {
    CommandSpec::new(["chmod", "+x", name])
        .with_cwd(dir)
        .with_description(format!("Making {} executable", name))
}

fn shell_script(dir: &Path, tools: &Tools, name: &str) -> CommandSpec {
    CommandSpec::new([tools.shell.as_str(), name])
        .with_cwd(dir)
        .with_description(format!("Running {}", name))
        .inherit()
}
