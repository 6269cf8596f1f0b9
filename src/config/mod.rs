//! Application configuration and constants.
//!
//! This module provides:
//! - Suite-scope constants (target URL, expected response values, timeouts)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
