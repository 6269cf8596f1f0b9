//! URL validation.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates the target URL.
///
/// Adds an `https://` prefix if no scheme is given, then checks that the URL
/// is syntactically valid, uses http or https, has a host and is no longer
/// than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing the first problem found.
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("URL is empty".to_string()));
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    // Checked after normalization, the added prefix counts too
    let length = normalized.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "URL exceeds maximum length ({length} > {MAX_URL_LENGTH}): {}...",
            normalized.chars().take(50).collect::<String>()
        )));
    }

    let parsed =
        Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme {other:?} in {url}"
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{url} has no host")));
    }

    Ok(parsed)
}
