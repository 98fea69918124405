//! Rentroll CLI
//!
//! Turns raw lease terms into a payment schedule and prints it.

mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::CommandLine;
use rentroll_shared::AppConfig;
use rentroll_shared::config::LogConfig;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = CommandLine::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.log);

    let mut stdout = std::io::stdout().lock();
    match commands::run(cli.command, &config, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("error: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(log: &LogConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
