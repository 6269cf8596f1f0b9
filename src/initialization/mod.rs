//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - reqwest clients (async and blocking)
//! - rustls client configuration
//! - Process-wide crypto provider

mod client;
mod logger;
mod tls;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::{init_blocking_client, init_client};
pub use logger::init_logger_with;
pub use tls::init_tls_config;

/// Initializes the crypto provider for TLS operations.
///
/// Installs ring as the process-wide default for `rustls`, for any client
/// that builds its configuration without naming a provider.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
