//! Error categorization.
//!
//! Maps the many client-specific error types onto a small set of categories
//! so outcomes from different transports can be compared side by side.

use std::error::Error as StdError;
use std::io;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use super::types::{FetchError, VerifyError};

/// Broad failure category shared by all transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// The request did not finish in time.
    Timeout,
    /// DNS resolution or TCP connect failed.
    Connect,
    /// TLS configuration, handshake or certificate failure.
    Tls,
    /// The URL could not be used.
    InvalidUrl,
    /// Malformed response or HTTP framing error reported by the client.
    Protocol,
    /// The response arrived but failed one or more checks.
    Assertion,
    /// Anything else.
    Other,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Connect => "connect",
            ErrorCategory::Tls => "tls",
            ErrorCategory::InvalidUrl => "invalid-url",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Assertion => "assertion",
            ErrorCategory::Other => "other",
        }
    }

    /// Categorizes a verification failure.
    pub fn of(error: &VerifyError) -> Self {
        match error {
            VerifyError::Fetch(fetch) => categorize_fetch_error(fetch),
            VerifyError::Checks { .. } => ErrorCategory::Assertion,
        }
    }
}

impl FetchError {
    /// Short category label for logs and reports.
    pub fn category(&self) -> ErrorCategory {
        categorize_fetch_error(self)
    }
}

/// Categorizes a `reqwest::Error`.
///
/// reqwest reports TLS failures as connect errors, so the source chain is
/// inspected for a `rustls::Error` before falling back to the flag checks.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorCategory {
    if error.is_timeout() {
        ErrorCategory::Timeout
    } else if error.is_builder() {
        ErrorCategory::InvalidUrl
    } else if chain_contains::<rustls::Error>(error) {
        ErrorCategory::Tls
    } else if error.is_connect() {
        ErrorCategory::Connect
    } else if error.is_body() || error.is_decode() || error.is_redirect() {
        ErrorCategory::Protocol
    } else if error.is_request() {
        ErrorCategory::Connect
    } else {
        ErrorCategory::Other
    }
}

/// Categorizes a transport error.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorCategory {
    match error {
        FetchError::InvalidUrl(_) | FetchError::Http(_) => ErrorCategory::InvalidUrl,
        FetchError::Timeout { .. } => ErrorCategory::Timeout,
        FetchError::Tls(_) | FetchError::InvalidServerName(_) => ErrorCategory::Tls,
        FetchError::Io(io_error) => categorize_io_error(io_error),
        FetchError::Reqwest(e) => categorize_reqwest_error(e),
        FetchError::Hyper(e) => {
            if e.is_timeout() {
                ErrorCategory::Timeout
            } else if e.is_parse() || e.is_incomplete_message() || e.is_body_write_aborted() {
                ErrorCategory::Protocol
            } else {
                ErrorCategory::Other
            }
        }
        FetchError::HyperClient(e) => {
            if e.is_connect() {
                if chain_contains::<rustls::Error>(e) {
                    ErrorCategory::Tls
                } else {
                    ErrorCategory::Connect
                }
            } else {
                ErrorCategory::Protocol
            }
        }
        FetchError::Minreq(e) => match e {
            minreq::Error::IoError(io_error) => categorize_io_error(io_error),
            minreq::Error::AddressNotFound => ErrorCategory::Connect,
            minreq::Error::RustlsCreateConnection(_) => ErrorCategory::Tls,
            _ => ErrorCategory::Protocol,
        },
        FetchError::HttpReq(e) => match e {
            http_req::error::Error::IO(io_error) => categorize_io_error(io_error),
            http_req::error::Error::Timeout => ErrorCategory::Timeout,
            http_req::error::Error::Tls => ErrorCategory::Tls,
            _ => ErrorCategory::Protocol,
        },
        FetchError::InvalidStatus(_) => ErrorCategory::Protocol,
        FetchError::TaskJoin(_) => ErrorCategory::Other,
    }
}

fn categorize_io_error(error: &io::Error) -> ErrorCategory {
    if chain_contains::<rustls::Error>(error) {
        return ErrorCategory::Tls;
    }
    if is_lookup_failure(error) {
        return ErrorCategory::Connect;
    }
    match error.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ErrorCategory::Timeout,
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::AddrNotAvailable => ErrorCategory::Connect,
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => ErrorCategory::Protocol,
        _ => ErrorCategory::Other,
    }
}

/// Name resolution failure from `ToSocketAddrs`.
///
/// std reports resolver errors with an uncategorized kind, so the message is
/// the only marker. tokio uses the second wording when a name resolves to no
/// addresses.
fn is_lookup_failure(error: &io::Error) -> bool {
    let message = error.to_string();
    message.contains("failed to lookup address")
        || message.contains("could not resolve to any address")
}

/// Walks the `source()` chain looking for an error of type `T`.
///
/// `io::Error::source` skips the wrapped error, so it is checked via `get_ref`.
fn chain_contains<T: StdError + 'static>(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if err.is::<T>() {
            return true;
        }
        if let Some(inner) = err.downcast_ref::<io::Error>().and_then(|e| e.get_ref()) {
            if inner.is::<T>() {
                return true;
            }
        }
        current = err.source();
    }
    false
}
