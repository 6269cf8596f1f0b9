//! Configuration constants.
//!
//! The fixed request target and the values every transport's response is
//! checked against. These are the defaults for the matching `Config` fields.

/// Endpoint every transport sends its GET request to.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Expected HTTP status code.
pub const EXPECTED_STATUS: u16 = 200;

/// Expected `Content-Type` value. Compared after parsing, so
/// `application/json;charset=utf-8` also matches.
pub const EXPECTED_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Substring the decoded response body must contain.
pub const EXPECTED_BODY_SUBSTRING: &str = "Leanne Graham";

/// Name of the response header carrying the media type.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

// Network operation timeouts
/// Overall per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds (applied where the client library supports it)
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("http_get_verifier/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length in characters, matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Number of body characters kept in failure messages.
pub const MAX_BODY_PREVIEW_CHARS: usize = 200;
