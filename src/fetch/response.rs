//! Response data shared by all transports.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use log::warn;

use crate::config::HEADER_CONTENT_TYPE;

/// Status, headers and decoded body of one response.
///
/// Header lookups are case-insensitive regardless of which client produced
/// the response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// Builds a response, decoding the body as UTF-8 (invalid sequences are replaced).
    pub fn from_bytes(status: u16, headers: HeaderMap, body: &[u8]) -> Self {
        Self {
            status,
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// First value of `name`, if present and valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw `Content-Type` value.
    pub fn content_type(&self) -> Option<&str> {
        self.header(HEADER_CONTENT_TYPE)
    }
}

/// Converts string header pairs from clients that don't use `http` types.
///
/// Pairs with an invalid name or value are skipped with a warning. Repeated
/// names are appended, not overwritten.
pub fn header_map_from_pairs<I, K, V>(pairs: I) -> HeaderMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let (name, value) = (name.as_ref(), value.as_ref());
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                headers.append(header_name, header_value);
            }
            _ => warn!("Skipping invalid response header {name:?}"),
        }
    }
    headers
}
