//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and verification
//! - Categorization of transport errors into short labels for logs and reports
//!
//! Failures are split into:
//! - **Fetch errors**: the request never produced a response (network, TLS, timeout)
//! - **Check failures**: a response arrived but did not match the expectations

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, ErrorCategory};
pub use types::{CheckFailure, FetchError, InitializationError, VerifyError};
