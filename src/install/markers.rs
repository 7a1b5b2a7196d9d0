//! Marker files and method detection.
//!
//! Detection is a table of `(marker, method)` pairs walked in order; the
//! first marker present decides the method. Nothing here runs a process.

use std::fs;
use std::path::Path;

use super::method::InstallMethod;

/// Python requirements file, installed before any method.
pub const REQUIREMENTS: &str = "requirements.txt";

/// setuptools descriptor.
pub const SETUP_PY: &str = "setup.py";

/// Any of these names selects the Makefile path.
pub const MAKEFILES: &[&str] = &["Makefile", "GNUmakefile", "makefile"];

/// CMake project file.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Conventional shell installer.
pub const INSTALL_SH: &str = "install.sh";

/// Fallback script names, scanned in this order.
pub const NAMED_SCRIPTS: &[&str] = &["install", "install.py", "build.sh", "build.py"];

/// A set of file names; present if any of them is a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(&'static [&'static str]);

impl Marker {
    pub fn present(&self, dir: &Path) -> bool {
        self.0.iter().any(|name| file_exists(dir, name))
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.0
    }
}

/// The ordered detection table for install methods.
///
/// `PackagePrereqs` is not in here: requirements are a prerequisite step,
/// not a method.
pub fn method_table() -> Vec<(Marker, InstallMethod)> {
    let mut table = vec![
        (Marker(&[SETUP_PY]), InstallMethod::PythonSetup),
        (Marker(MAKEFILES), InstallMethod::MakeBuild),
        (Marker(&[CMAKE_LISTS]), InstallMethod::CMakeBuild),
        (Marker(&[INSTALL_SH]), InstallMethod::ShellInstallScript),
    ];
    for (i, name) in NAMED_SCRIPTS.iter().enumerate() {
        table.push((
            Marker(&NAMED_SCRIPTS[i..=i]),
            InstallMethod::NamedScript((*name).to_string()),
        ));
    }
    table
}

/// First install method whose marker is present in `dir`.
pub fn detect_method(dir: &Path) -> Option<InstallMethod> {
    method_table()
        .into_iter()
        .find(|(marker, _)| marker.present(dir))
        .map(|(_, method)| method)
}

/// Whether the requirements marker is present.
pub fn has_requirements(dir: &Path) -> bool {
    file_exists(dir, REQUIREMENTS)
}

/// Check if a regular file exists in `dir`.
///
/// Directories named like a marker (an `install/` folder, say) do not count.
pub fn file_exists(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file()
}

/// Sorted names of the entries in `dir`, for diagnostics.
pub fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for f in files {
            fs::write(temp.path().join(f), "").unwrap();
        }
        temp
    }

    #[test]
    fn each_single_marker_selects_its_method() {
        let cases = [
            ("setup.py", InstallMethod::PythonSetup),
            ("Makefile", InstallMethod::MakeBuild),
            ("GNUmakefile", InstallMethod::MakeBuild),
            ("CMakeLists.txt", InstallMethod::CMakeBuild),
            ("install.sh", InstallMethod::ShellInstallScript),
            ("install", InstallMethod::NamedScript("install".into())),
            ("install.py", InstallMethod::NamedScript("install.py".into())),
            ("build.sh", InstallMethod::NamedScript("build.sh".into())),
            ("build.py", InstallMethod::NamedScript("build.py".into())),
        ];
        for (file, expected) in cases {
            let temp = dir_with(&[file]);
            assert_eq!(detect_method(temp.path()), Some(expected), "marker {}", file);
        }
    }

    #[test]
    fn makefile_beats_cmake() {
        let temp = dir_with(&["CMakeLists.txt", "Makefile"]);
        assert_eq!(detect_method(temp.path()), Some(InstallMethod::MakeBuild));
    }

    #[test]
    fn setup_py_beats_everything() {
        let temp = dir_with(&["Makefile", "install.sh", "setup.py", "build.py"]);
        assert_eq!(detect_method(temp.path()), Some(InstallMethod::PythonSetup));
    }

    #[test]
    fn named_scripts_scan_in_order() {
        let temp = dir_with(&["build.py", "build.sh"]);
        assert_eq!(
            detect_method(temp.path()),
            Some(InstallMethod::NamedScript("build.sh".into()))
        );
    }

    #[test]
    fn requirements_alone_is_not_a_method() {
        let temp = dir_with(&["requirements.txt"]);
        assert!(has_requirements(temp.path()));
        assert_eq!(detect_method(temp.path()), None);
    }

    #[test]
    fn marker_directories_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("install")).unwrap();
        assert_eq!(detect_method(temp.path()), None);
    }

    #[test]
    fn list_entries_is_sorted() {
        let temp = dir_with(&["b.txt", "README.md", "a.txt"]);
        fs::create_dir(temp.path().join("src")).unwrap();
        let entries = list_entries(temp.path()).unwrap();
        assert_eq!(entries, vec!["README.md", "a.txt", "b.txt", "src"]);
    }

    #[test]
    fn table_order_is_fixed() {
        let methods: Vec<InstallMethod> = method_table().into_iter().map(|(_, m)| m).collect();
        assert_eq!(methods[0], InstallMethod::PythonSetup);
        assert_eq!(methods[1], InstallMethod::MakeBuild);
        assert_eq!(methods[2], InstallMethod::CMakeBuild);
        assert_eq!(methods[3], InstallMethod::ShellInstallScript);
        assert_eq!(methods.len(), 8);
        assert_eq!(method_table()[4].0.names(), &["install"]);
    }
}
