//! Summary printing.

use log::{error, info};
use strum::IntoEnumIterator;

use crate::error_handling::ErrorCategory;
use crate::VerificationReport;

/// Logs one line per transport followed by failure counts per category and a
/// one-line summary.
pub fn print_verification_summary(report: &VerificationReport) {
    for outcome in &report.outcomes {
        let status = outcome
            .status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        if outcome.passed {
            info!(
                "   {:<17} PASS  status={} {}ms",
                outcome.transport.as_str(),
                status,
                outcome.elapsed_ms
            );
        } else {
            error!(
                "   {:<17} FAIL  status={} {}ms: {}",
                outcome.transport.as_str(),
                status,
                outcome.elapsed_ms,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    print_failure_statistics(report);

    info!(
        "Verified {} in {:.1}s: {} of {} transport{} passed",
        report.url,
        report.elapsed_seconds,
        report.passed,
        report.outcomes.len(),
        if report.outcomes.len() == 1 { "" } else { "s" }
    );
}

/// Number of failed outcomes in `category`.
pub fn count_failures(report: &VerificationReport, category: ErrorCategory) -> usize {
    report
        .outcomes
        .iter()
        .filter(|o| o.error_category == Some(category))
        .count()
}

fn print_failure_statistics(report: &VerificationReport) {
    if report.failed == 0 {
        return;
    }

    info!("Failure Counts ({} total):", report.failed);
    for category in ErrorCategory::iter() {
        let count = count_failures(report, category);
        if count > 0 {
            info!("   {}: {}", category.as_str(), count);
        }
    }
}
