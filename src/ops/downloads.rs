//! Fetching files with wget or curl.

use std::path::Path;

use crate::shell::CommandSpec;
use crate::ui::hints;

use super::context::OpContext;
use super::files::{chmod_spec, path_arg};
use super::report::OperationReport;

/// Used when the URL path has no last segment.
pub const FALLBACK_FILENAME: &str = "downloaded_file";

/// Download clients, in order of preference.
const CLIENTS: &[&str] = &["wget", "curl"];

/// Last segment of the URL's path, ignoring query and fragment.
pub fn filename_from_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");

    let path = match without_query.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or(""),
        None => without_query,
    };

    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_FILENAME.to_string(),
    }
}

/// Whether a downloaded file should be made executable.
pub fn is_script(filename: &str) -> bool {
    filename.ends_with(".sh") || filename.ends_with(".py")
}

fn fetch_spec(client: &str, url: &str, target: &Path) -> CommandSpec {
    let target_arg = path_arg(target);
    let args = match client {
        "curl" => vec![
            "curl".to_string(),
            "-L".to_string(),
            "-o".to_string(),
            target_arg,
            url.to_string(),
        ],
        _ => vec![
            client.to_string(),
            "-O".to_string(),
            target_arg,
            url.to_string(),
        ],
    };
    CommandSpec::new(args)
        .with_description(format!("Downloading to {}", target.display()))
        .inherit()
}

/// Download each URL into the download directory.
pub fn download(ctx: &mut OpContext<'_>, urls: &[String]) -> OperationReport {
    let mut report = OperationReport::new("download");
    ctx.ui.show_header("Download");

    let dir = ctx.config.settings.download_dir.clone();
    if let Err(e) = ctx.ensure_dir(&dir) {
        ctx.ui
            .error(&format!("Could not create {}: {}", dir.display(), e));
        report.fail(e.to_string());
        return report;
    }

    let client = CLIENTS.iter().copied().find(|c| ctx.runner.has_tool(c));

    for url in urls {
        let filename = filename_from_url(url);
        let target = dir.join(&filename);

        let Some(client) = client else {
            ctx.ui.error("Neither wget nor curl is available");
            ctx.ui.show_hint(hints::install_download_client());
            report.fail(format!("{}: no download client", url));
            continue;
        };

        ctx.ui.message(&format!("Downloading {}", url));
        if !ctx.run_checked(&fetch_spec(client, url, &target), &mut report) {
            continue;
        }
        ctx.ui
            .message(&format!("File downloaded to: {}", target.display()));

        if is_script(&filename) {
            ctx.run_checked(&chmod_spec(&target), &mut report);
        }
    }
    report
}
