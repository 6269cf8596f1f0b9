//! HTTP client initialization.
//!
//! Builds the reqwest clients used by the async and blocking transports.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::CONNECT_TIMEOUT_SECS;
use crate::fetch::ClientSettings;

/// Initializes the async reqwest client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - Overall timeout from settings
/// - TCP connect timeout of `CONNECT_TIMEOUT_SECS`
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(settings: &ClientSettings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(settings.timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(settings.user_agent.clone())
        .use_rustls_tls()
        .build()
}

/// Initializes the blocking reqwest client.
///
/// Same configuration as [`init_client`]. Must not be called from an async
/// context; the blocking transport calls it from `spawn_blocking`.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_blocking_client(
    settings: &ClientSettings,
) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::ClientBuilder::new()
        .timeout(settings.timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(settings.user_agent.clone())
        .use_rustls_tls()
        .build()
}
