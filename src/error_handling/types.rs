//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// An expected value that cannot be checked against (e.g. unparseable content type).
    #[error("Invalid expectation: {0}")]
    ExpectationError(String),
}

/// Errors that prevent a transport from producing a response.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is malformed, too long or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("{transport} request timed out after {seconds}s")]
    Timeout {
        /// Transport that timed out
        transport: String,
        /// Timeout that elapsed, in seconds
        seconds: u64,
    },

    /// Socket level failure (connect, read, write, TLS handshake over tokio).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS configuration or protocol failure.
    #[error("TLS error: {0}")]
    Tls(#[from] rustls::Error),

    /// The host cannot be used as a TLS server name.
    #[error("Invalid TLS server name: {0}")]
    InvalidServerName(String),

    /// Building the request failed.
    #[error("Request build error: {0}")]
    Http(#[from] http::Error),

    /// hyper connection-level failure.
    #[error("hyper error: {0}")]
    Hyper(#[from] hyper::Error),

    /// hyper-util pooled client failure.
    #[error("hyper-util client error: {0}")]
    HyperClient(#[from] hyper_util::client::legacy::Error),

    /// reqwest failure (async or blocking).
    #[error("reqwest error: {0}")]
    Reqwest(#[from] ReqwestError),

    /// minreq failure.
    #[error("minreq error: {0}")]
    Minreq(#[from] minreq::Error),

    /// http_req failure.
    #[error("http_req error: {0}")]
    HttpReq(#[from] http_req::error::Error),

    /// A status code outside the valid HTTP range.
    #[error("Invalid status code: {0}")]
    InvalidStatus(i32),

    /// A blocking transport's task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// A single expectation a response did not meet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// Status code differs from the expected one.
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch {
        /// Expected status code
        expected: u16,
        /// Status code received
        actual: u16,
    },

    /// No `Content-Type` header in the response.
    #[error("response has no Content-Type header")]
    MissingContentType,

    /// `Content-Type` header present but not a valid media type.
    #[error("unparseable Content-Type {0:?}")]
    UnparseableContentType(String),

    /// `Content-Type` parsed but does not match.
    #[error("expected Content-Type {expected:?}, got {actual:?}")]
    ContentTypeMismatch {
        /// Expected content type
        expected: String,
        /// Content type received
        actual: String,
    },

    /// Body does not contain the expected substring.
    #[error("body does not contain {expected:?} (body starts with {body_preview:?})")]
    BodyMissingSubstring {
        /// Substring that was expected
        expected: String,
        /// Leading part of the body received
        body_preview: String,
    },
}

/// Outcome of a failed verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The request itself failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response arrived but one or more checks failed.
    #[error("status {status}: {}", join_failures(.failures))]
    Checks {
        /// Status code of the response that failed the checks
        status: u16,
        /// Every failed check, in evaluation order
        failures: Vec<CheckFailure>,
    },
}

impl VerifyError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            VerifyError::Fetch(_) => None,
            VerifyError::Checks { status, .. } => Some(*status),
        }
    }
}

fn join_failures(failures: &[CheckFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
