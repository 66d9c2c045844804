//! HouseVision Photo Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

use housevision_downloader::{
    cli::Args,
    config::validate_config,
    download::{run_pipeline, RunReport},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(report) => ExitCode::from(completion_code(&report) as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::ConfigValidation { .. } | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::SETUP_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

/// Exit code for a run that reached completion.
///
/// Per-item failures (exhausted pages, failed downloads) still exit 0;
/// only a user-interrupted run reports ABORT.
fn completion_code(report: &RunReport) -> i32 {
    if report.pages_cancelled > 0 {
        exit_codes::ABORT
    } else {
        exit_codes::SUCCESS
    }
}

async fn run() -> Result<RunReport> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    let config = args.into_config();
    validate_config(&config)?;
    print_config_summary(&config);

    // Ctrl-C trips the cancellation token; in-flight retries and downloads
    // observe it and resolve instead of being torn down mid-write.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                print_warning("Interrupt received, winding down in-flight work...");
                cancel.cancel();
            }
        });
    }

    let report = run_pipeline(&config, cancel).await?;
    print_run_stats(&report);

    if report.is_clean() {
        print_info("Process complete");
    } else {
        print_warning("Process complete with failures (see statistics above)");
    }

    Ok(report)
}
