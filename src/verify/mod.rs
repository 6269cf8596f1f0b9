//! The GET verifier.
//!
//! A response passes when:
//! - its status equals the expected status
//! - its `Content-Type` parses and satisfies the expected content type
//! - its decoded body contains the expected substring
//!
//! Every check is evaluated, so one report lists all mismatches.

mod content_type;

use log::debug;
use url::Url;

use crate::config::{
    EXPECTED_BODY_SUBSTRING, EXPECTED_CONTENT_TYPE, EXPECTED_STATUS, MAX_BODY_PREVIEW_CHARS,
};
use crate::error_handling::{CheckFailure, InitializationError, VerifyError};
use crate::fetch::{fetch, ClientSettings, HttpResponse, Transport};

pub use content_type::ContentType;

/// Values a response is checked against. Immutable once built.
#[derive(Debug, Clone)]
pub struct Expectations {
    status: u16,
    content_type: ContentType,
    content_type_raw: String,
    body_substring: String,
}

impl Expectations {
    /// Builds expectations, parsing the content type up front.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ExpectationError` if `content_type` is not
    /// a valid media type.
    pub fn new(
        status: u16,
        content_type: &str,
        body_substring: &str,
    ) -> Result<Self, InitializationError> {
        let parsed = content_type.parse::<ContentType>().map_err(|e| {
            InitializationError::ExpectationError(format!(
                "content type {content_type:?} is not a media type: {e}"
            ))
        })?;
        Ok(Self {
            status,
            content_type: parsed,
            content_type_raw: content_type.to_string(),
            body_substring: body_substring.to_string(),
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    pub fn body_substring(&self) -> &str {
        &self.body_substring
    }
}

impl Default for Expectations {
    fn default() -> Self {
        // The constant always parses; the fallback only drops its charset.
        let content_type = EXPECTED_CONTENT_TYPE
            .parse()
            .unwrap_or_else(|_| ContentType::from(mime::APPLICATION_JSON));
        Self {
            status: EXPECTED_STATUS,
            content_type,
            content_type_raw: EXPECTED_CONTENT_TYPE.to_string(),
            body_substring: EXPECTED_BODY_SUBSTRING.to_string(),
        }
    }
}

/// Checks `response` against `expectations`, returning every failed check.
pub fn check_response(response: &HttpResponse, expectations: &Expectations) -> Vec<CheckFailure> {
    let mut failures = Vec::new();

    if response.status != expectations.status {
        failures.push(CheckFailure::StatusMismatch {
            expected: expectations.status,
            actual: response.status,
        });
    }

    match response.content_type() {
        None => failures.push(CheckFailure::MissingContentType),
        Some(raw) => match raw.parse::<ContentType>() {
            Err(_) => failures.push(CheckFailure::UnparseableContentType(raw.to_string())),
            Ok(actual) if !actual.satisfies(&expectations.content_type) => {
                failures.push(CheckFailure::ContentTypeMismatch {
                    expected: expectations.content_type_raw.clone(),
                    actual: raw.to_string(),
                });
            }
            Ok(_) => {}
        },
    }

    if !response.body.contains(&expectations.body_substring) {
        failures.push(CheckFailure::BodyMissingSubstring {
            expected: expectations.body_substring.clone(),
            body_preview: response.body.chars().take(MAX_BODY_PREVIEW_CHARS).collect(),
        });
    }

    failures
}

/// Fetches `url` with `transport` and checks the response.
///
/// # Returns
///
/// The response when every check passes.
///
/// # Errors
///
/// Returns `VerifyError::Fetch` if no response was received, or
/// `VerifyError::Checks` listing every failed check.
pub async fn verify_get(
    transport: Transport,
    url: &Url,
    expectations: &Expectations,
    settings: &ClientSettings,
) -> Result<HttpResponse, VerifyError> {
    let response = fetch(transport, url, settings).await?;

    let failures = check_response(&response, expectations);
    if failures.is_empty() {
        debug!("{transport}: all checks passed");
        Ok(response)
    } else {
        Err(VerifyError::Checks {
            status: response.status,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::header_map_from_pairs;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        let headers = header_map_from_pairs(content_type.map(|ct| ("Content-Type", ct)));
        HttpResponse::from_bytes(status, headers, body.as_bytes())
    }

    const USER_JSON: &str = r#"{"id": 1, "name": "Leanne Graham", "username": "Bret"}"#;

    #[test]
    fn test_matching_response_passes() {
        let resp = response(200, Some("application/json; charset=utf-8"), USER_JSON);
        assert!(check_response(&resp, &Expectations::default()).is_empty());
    }

    #[test]
    fn test_unspaced_content_type_passes() {
        let resp = response(200, Some("application/json;charset=utf-8"), USER_JSON);
        assert!(check_response(&resp, &Expectations::default()).is_empty());
    }

    #[test]
    fn test_status_mismatch() {
        let resp = response(404, Some("application/json; charset=utf-8"), USER_JSON);
        assert_eq!(
            check_response(&resp, &Expectations::default()),
            vec![CheckFailure::StatusMismatch {
                expected: 200,
                actual: 404
            }]
        );
    }

    #[test]
    fn test_missing_content_type() {
        let resp = response(200, None, USER_JSON);
        assert_eq!(
            check_response(&resp, &Expectations::default()),
            vec![CheckFailure::MissingContentType]
        );
    }

    #[test]
    fn test_unparseable_content_type() {
        let resp = response(200, Some("json please"), USER_JSON);
        assert_eq!(
            check_response(&resp, &Expectations::default()),
            vec![CheckFailure::UnparseableContentType("json please".to_string())]
        );
    }

    #[test]
    fn test_content_type_mismatch_reports_raw_values() {
        let resp = response(200, Some("text/html; charset=utf-8"), USER_JSON);
        assert_eq!(
            check_response(&resp, &Expectations::default()),
            vec![CheckFailure::ContentTypeMismatch {
                expected: "application/json; charset=utf-8".to_string(),
                actual: "text/html; charset=utf-8".to_string(),
            }]
        );
    }

    #[test]
    fn test_body_missing_substring_is_case_sensitive() {
        let resp = response(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"name": "leanne graham"}"#,
        );
        let failures = check_response(&resp, &Expectations::default());
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            CheckFailure::BodyMissingSubstring { expected, .. } if expected == "Leanne Graham"
        ));
    }

    #[test]
    fn test_body_preview_is_truncated() {
        let long_body = "x".repeat(MAX_BODY_PREVIEW_CHARS * 3);
        let resp = response(200, Some("application/json; charset=utf-8"), &long_body);
        match check_response(&resp, &Expectations::default()).as_slice() {
            [CheckFailure::BodyMissingSubstring { body_preview, .. }] => {
                assert_eq!(body_preview.chars().count(), MAX_BODY_PREVIEW_CHARS);
            }
            other => panic!("unexpected failures: {other:?}"),
        }
    }

    #[test]
    fn test_all_failures_reported_together() {
        let resp = response(500, None, "Internal Server Error");
        let failures = check_response(&resp, &Expectations::default());
        assert_eq!(failures.len(), 3);
        assert!(matches!(failures[0], CheckFailure::StatusMismatch { .. }));
        assert!(matches!(failures[1], CheckFailure::MissingContentType));
        assert!(matches!(
            failures[2],
            CheckFailure::BodyMissingSubstring { .. }
        ));
    }

    #[test]
    fn test_custom_expectations() {
        let expectations = Expectations::new(201, "text/plain", "created").unwrap();
        let resp = response(201, Some("text/plain; charset=us-ascii"), "resource created");
        assert!(check_response(&resp, &expectations).is_empty());
        assert_eq!(expectations.status(), 201);
        assert_eq!(expectations.body_substring(), "created");
        assert_eq!(expectations.content_type().essence(), "text/plain");
    }

    #[test]
    fn test_invalid_expected_content_type_is_rejected() {
        let result = Expectations::new(200, "definitely not", "x");
        assert!(matches!(
            result,
            Err(InitializationError::ExpectationError(_))
        ));
    }

    #[test]
    fn test_default_matches_constants() {
        let default = Expectations::default();
        let from_constants =
            Expectations::new(EXPECTED_STATUS, EXPECTED_CONTENT_TYPE, EXPECTED_BODY_SUBSTRING)
                .unwrap();
        assert_eq!(default.status(), from_constants.status());
        assert_eq!(
            default.content_type().essence(),
            from_constants.content_type().essence()
        );
        assert_eq!(
            default.content_type().charset(),
            from_constants.content_type().charset()
        );
        assert_eq!(default.body_substring(), from_constants.body_substring());
    }
}
