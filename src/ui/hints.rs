//! Contextual hint generation.
//!
//! Suggests the logical next action after a failure.

/// Hint for a program that is not on PATH.
pub fn install_missing_tool(tool: &str) -> String {
    let package = match tool {
        "pip3" | "pip" => "python3-pip",
        "python3" | "python" => "python3",
        "cmake" => "cmake",
        "make" => "build-essential",
        "snap" => "snapd",
        other => other,
    };
    format!("Install it first, e.g. `fcp --install {}`.", package)
}

/// Hint when no download client is installed.
pub fn install_download_client() -> &'static str {
    "Install wget or curl, e.g. `fcp --install wget`."
}

/// Hint when a checkout already exists and `--github` skipped it.
pub fn existing_checkout(path: &str) -> String {
    format!("Use --github-install to update and install, or remove {}.", path)
}

/// Hint after the prober could not install a checkout.
pub fn manual_install(path: &str) -> String {
    format!(
        "The source is at {}. Install it manually or check its README for instructions.",
        path
    )
}

/// Hint when the elevated install step fails.
pub fn elevated_install_failed() -> &'static str {
    "Installing usually needs root; re-run with sudo or check the build output above."
}
