//! http_get_verifier library: one GET request, many HTTP client stacks
//!
//! This library sends the same GET request through several Rust HTTP clients
//! and checks each response's status, `Content-Type` and body against the same
//! expectations.
//!
//! # Example
//!
//! ```no_run
//! use http_get_verifier::{run_verification, Config, Transport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     transports: vec![Transport::Reqwest, Transport::Minreq],
//!     timeout_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let report = run_verification(config).await?;
//! println!("{} passed, {} failed", report.passed, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! A single transport can be checked directly:
//!
//! ```no_run
//! use http_get_verifier::{verify_get, ClientSettings, Expectations, Transport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = url::Url::parse(http_get_verifier::config::DEFAULT_URL)?;
//! let response = verify_get(
//!     Transport::HyperConnection,
//!     &url,
//!     &Expectations::default(),
//!     &ClientSettings::default(),
//! )
//! .await?;
//! assert_eq!(response.status, 200);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod verify;

// Re-export public API
pub use app::validate_url;
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{
    categorize_fetch_error, CheckFailure, ErrorCategory, FetchError, InitializationError,
    VerifyError,
};
pub use fetch::{ClientSettings, HttpResponse, Transport};
pub use run::{evaluate_exit_code, run_verification, TransportOutcome, VerificationReport};
pub use verify::{check_response, verify_get, ContentType, Expectations};

// Internal run module (runs every selected transport against the URL)
mod run {
    use std::time::{Duration, Instant};

    use anyhow::{bail, Context, Result};
    use log::{error, info};
    use serde::Serialize;

    use crate::app::{print_verification_summary, validate_url, write_report};
    use crate::config::{Config, FailOn};
    use crate::error_handling::ErrorCategory;
    use crate::fetch::{ClientSettings, Transport};
    use crate::verify::{verify_get, Expectations};

    /// Result of verifying the URL with one transport.
    #[derive(Debug, Clone, Serialize)]
    pub struct TransportOutcome {
        /// Transport used
        pub transport: Transport,
        /// Whether every check passed
        pub passed: bool,
        /// Wall-clock time for request and checks, in milliseconds
        pub elapsed_ms: u64,
        /// Status code, if a response was received
        pub status: Option<u16>,
        /// Error message, if verification failed
        pub error: Option<String>,
        /// Category of the failure, if verification failed
        pub error_category: Option<ErrorCategory>,
    }

    /// Results of a verification run.
    #[derive(Debug, Clone, Serialize)]
    pub struct VerificationReport {
        /// URL that was requested
        pub url: String,
        /// One entry per transport, in the order they ran
        pub outcomes: Vec<TransportOutcome>,
        /// Number of transports whose response passed every check
        pub passed: usize,
        /// Number of transports that failed
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl VerificationReport {
        /// Whether every transport passed.
        pub fn all_passed(&self) -> bool {
            self.failed == 0
        }
    }

    /// Runs a verification with the provided configuration.
    ///
    /// Each selected transport sends one GET request to `config.url`, in the
    /// order given. A failing transport doesn't stop the run; its failure is
    /// recorded in the report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The URL is invalid
    /// - The expected content type is not a valid media type
    /// - The timeout is zero
    /// - The report file cannot be written
    pub async fn run_verification(config: Config) -> Result<VerificationReport> {
        let url = validate_url(&config.url).context("Invalid target URL")?;
        if config.timeout_seconds == 0 {
            bail!("Timeout must be at least 1 second");
        }
        let expectations = Expectations::new(
            config.expected_status,
            &config.expected_content_type,
            &config.expected_body,
        )
        .context("Invalid expectations")?;
        let settings = ClientSettings {
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        };

        let transports = config.selected_transports();
        info!(
            "Verifying GET {url} with {} transport{}",
            transports.len(),
            if transports.len() == 1 { "" } else { "s" }
        );

        let start_time = Instant::now();
        let mut outcomes = Vec::with_capacity(transports.len());

        for transport in transports {
            let started = Instant::now();
            let result = verify_get(transport, &url, &expectations, &settings).await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            let outcome = match result {
                Ok(response) => {
                    info!("{transport}: passed (status {}, {elapsed_ms}ms)", response.status);
                    TransportOutcome {
                        transport,
                        passed: true,
                        elapsed_ms,
                        status: Some(response.status),
                        error: None,
                        error_category: None,
                    }
                }
                Err(e) => {
                    let category = ErrorCategory::of(&e);
                    error!("{transport}: failed [{category}] after {elapsed_ms}ms: {e}");
                    TransportOutcome {
                        transport,
                        passed: false,
                        elapsed_ms,
                        status: e.status(),
                        error: Some(e.to_string()),
                        error_category: Some(category),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let passed = outcomes.iter().filter(|o| o.passed).count();
        let report = VerificationReport {
            url: url.to_string(),
            failed: outcomes.len() - passed,
            passed,
            outcomes,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };

        print_verification_summary(&report);

        if let Some(path) = config.report.as_deref() {
            write_report(&report, path).await?;
        }

        Ok(report)
    }

    /// Maps a finished run to the binary's exit code.
    ///
    /// Returns 2 when `fail_on` is `AnyFailure` and at least one transport
    /// failed, 0 otherwise.
    pub fn evaluate_exit_code(fail_on: FailOn, report: &VerificationReport) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::AnyFailure => {
                if report.all_passed() {
                    0
                } else {
                    2
                }
            }
        }
    }

}
