//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strum::IntoEnumIterator;

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_USER_AGENT, EXPECTED_BODY_SUBSTRING,
    EXPECTED_CONTENT_TYPE, EXPECTED_STATUS,
};
use crate::fetch::Transport;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 2 if any transport failed verification
    AnyFailure,
}

/// Verification configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// through `Default` by library users and tests.
///
/// # Examples
///
/// ```bash
/// # Check the default endpoint with every transport
/// http_get_verifier
///
/// # Only two transports, shorter timeout, JSON report
/// http_get_verifier --transport reqwest --transport minreq --timeout-seconds 5 --report out.json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "http_get_verifier",
    about = "Sends one GET request per HTTP client stack and verifies status, Content-Type and body."
)]
pub struct Config {
    /// URL to request
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Transport to exercise (repeatable). All transports run when omitted.
    #[arg(long = "transport", value_enum)]
    pub transports: Vec<Transport>,

    /// Expected HTTP status code
    #[arg(long, default_value_t = EXPECTED_STATUS)]
    pub expected_status: u16,

    /// Expected Content-Type (compared after parsing)
    #[arg(long, default_value = EXPECTED_CONTENT_TYPE)]
    pub expected_content_type: String,

    /// Substring the response body must contain
    #[arg(long, default_value = EXPECTED_BODY_SUBSTRING)]
    pub expected_body: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::AnyFailure)]
    pub fail_on: FailOn,

    /// Write a JSON report of every transport's outcome to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Config {
    /// Transports to run, in declaration order when none were selected.
    pub fn selected_transports(&self) -> Vec<Transport> {
        if self.transports.is_empty() {
            Transport::iter().collect()
        } else {
            self.transports.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            transports: Vec::new(),
            expected_status: EXPECTED_STATUS,
            expected_content_type: EXPECTED_CONTENT_TYPE.to_string(),
            expected_body: EXPECTED_BODY_SUBSTRING.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::AnyFailure,
            report: None,
        }
    }
}
