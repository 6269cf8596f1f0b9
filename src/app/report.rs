//! JSON report export.
//!
//! Writes the whole `VerificationReport` as one pretty-printed JSON document,
//! suitable for piping to `jq` or archiving as a CI artifact.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::VerificationReport;

/// Writes `report` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized or the file cannot be
/// written.
pub async fn write_report(report: &VerificationReport, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    json.push('\n');

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::error_handling::ErrorCategory;
    use crate::fetch::Transport;
    use crate::{TransportOutcome, VerificationReport};
    use tempfile::TempDir;

    fn sample_report() -> VerificationReport {
        VerificationReport {
            url: "https://jsonplaceholder.typicode.com/users/1".to_string(),
            outcomes: vec![
                TransportOutcome {
                    transport: Transport::Reqwest,
                    passed: true,
                    elapsed_ms: 120,
                    status: Some(200),
                    error: None,
                    error_category: None,
                },
                TransportOutcome {
                    transport: Transport::Minreq,
                    passed: false,
                    elapsed_ms: 10_000,
                    status: None,
                    error: Some("minreq request timed out after 10s".to_string()),
                    error_category: Some(ErrorCategory::Timeout),
                },
            ],
            passed: 1,
            failed: 1,
            elapsed_seconds: 10.1,
        }
    }

    #[tokio::test]
    async fn test_write_report_creates_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        write_report(&sample_report(), &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains('\n'), "report should be pretty-printed");
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["outcomes"][0]["transport"], "reqwest");
        assert_eq!(json["outcomes"][0]["status"], 200);
        assert!(json["outcomes"][0]["error"].is_null());
        assert_eq!(json["outcomes"][1]["transport"], "minreq");
        assert_eq!(json["outcomes"][1]["error_category"], "timeout");
    }

    #[tokio::test]
    async fn test_write_report_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "stale").unwrap();

        write_report(&sample_report(), &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
    }

    #[tokio::test]
    async fn test_write_report_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("report.json");

        let err = write_report(&sample_report(), &path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }
}
