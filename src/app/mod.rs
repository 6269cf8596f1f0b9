//! Main application modules.
//!
//! URL validation, summary printing and report export used by the run loop.

pub mod report;
pub mod statistics;
pub mod url;

// Re-export public API
pub use report::write_report;
pub use statistics::print_verification_summary;
pub use url::validate_url;
