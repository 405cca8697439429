//! Finboard Report
//!
//! Reads a data snapshot and prints the financial analytics as JSON.
//!
//! Usage: finboard-report <snapshot.json | ->

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finboard_shared::config::DEFAULT_LOG_FILTER;
use finboard_shared::{AppConfig, AppError, AppResult};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration; tracing comes up even when this fails
    let config = AppConfig::load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter(&config).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match config.map_err(anyhow::Error::from).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Report failed");
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Configured log filter, or the default when configuration failed to load.
fn log_filter(config: &AppResult<AppConfig>) -> &str {
    config
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |config| config.logging.filter.as_str())
}

fn run(config: AppConfig) -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Validation("usage: finboard-report <snapshot.json | ->".into()))?;

    let snapshot = report::read_snapshot(&path)
        .with_context(|| format!("Failed to load snapshot from {}", path.display()))?;

    info!(
        currency = %config.analytics.default_currency,
        project_id = ?config.analytics.project_id,
        as_of = ?config.analytics.as_of,
        "Building report"
    );
    let report = report::build_now(&snapshot, &config.analytics);

    println!("{}", report::render(&report, config.report.pretty)?);

    Ok(())
}
