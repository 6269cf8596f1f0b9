//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `http_get_verifier` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use http_get_verifier::initialization::{init_crypto_provider, init_logger_with};
use http_get_verifier::{evaluate_exit_code, run_verification, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    let fail_on = config.fail_on;

    match run_verification(config).await {
        Ok(report) => {
            println!(
                "{} {}: {} of {} transport{} passed in {:.1}s",
                if report.all_passed() { "✅" } else { "❌" },
                report.url,
                report.passed,
                report.outcomes.len(),
                if report.outcomes.len() == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            for outcome in report.outcomes.iter().filter(|o| !o.passed) {
                println!(
                    "   {}: {}",
                    outcome.transport,
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }

            // Exit explicitly so runtime shutdown never waits on a blocking client thread
            process::exit(evaluate_exit_code(fail_on, &report));
        }
        Err(e) => {
            eprintln!("http_get_verifier error: {:#}", e);
            process::exit(1);
        }
    }
}
