use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use flakebot_reporter::cli::Args;
use flakebot_reporter::config::ProcessEnvironment;
use flakebot_reporter::pipeline;

fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    if let Err(e) = initialize_logging(args.verbose) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Report the test results at the requested path
fn run(args: &Args) -> Result<()> {
    let config = args.to_config();
    info!("Reporting {} to {}", args.path.display(), config.api_url);

    let report = pipeline::run(&config, &args.path, &ProcessEnvironment)
        .with_context(|| format!("Failed to report {}", args.path.display()))?;

    info!(
        "Report for archive {} submitted from {}",
        report.archive, report.provider
    );
    Ok(())
}
