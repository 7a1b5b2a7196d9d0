//! fcp CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use fcp::cli::{dispatch, plan, Cli};
use fcp::config::load_config;
use fcp::ops::OpContext;
use fcp::shell::{is_ci, is_elevated, CommandRunner, DryRunRunner, SystemRunner};
use fcp::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fcp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fcp=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("fcp starting with args: {:?}", cli);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "fcp", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    if !cli.has_operations() {
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!();
        return ExitCode::from(1);
    }

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    let mut config = config.with_overrides(cli.github_dir.clone(), cli.download_dir.clone());
    if is_elevated() {
        tracing::debug!("running as root, not elevating install steps");
        config.tools.elevate = None;
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::from(config.settings.default_output)
    };

    let mut ui = create_ui(!is_ci(), output_mode);

    let mut system = SystemRunner::new();
    let mut dry = DryRunRunner::new();
    let runner: &mut dyn CommandRunner = if cli.dry_run { &mut dry } else { &mut system };

    let ops = plan(&cli);
    let mut ctx = OpContext::new(runner, ui.as_mut(), &config).with_dry_run(cli.dry_run);
    let report = dispatch(&mut ctx, &ops);

    ExitCode::from(report.exit_code())
}
