//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring logging to stderr
//! - Mapping failures to a printed message and exit code

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use forecast_core::ForecastError;

mod cli;

/// Exit code for failures outside the lookup itself, e.g. a closed stdout.
const OUTPUT_EXIT_CODE: u8 = 4;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the report, so diagnostics go to stderr.
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// `RUST_LOG`-style directives, falling back to `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ForecastError>()
        .map_or(OUTPUT_EXIT_CODE, ForecastError::exit_code)
}
