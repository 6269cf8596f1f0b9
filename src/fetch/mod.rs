//! Transport strategies for issuing a single GET request.
//!
//! Each [`Transport`] variant wraps a different Rust HTTP client stack. They all
//! take the same URL and [`ClientSettings`] and produce the same
//! [`HttpResponse`], so the verification block can be run unchanged against
//! every one of them.
//!
//! Blocking clients run on tokio's blocking pool. Every request, blocking or
//! not, is bounded by `ClientSettings::timeout`.

mod http_req_client;
mod hyper_connection;
mod hyper_pooled;
mod minreq_client;
mod reqwest_client;
mod response;

use std::time::Duration;

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use url::{Host, Url};

use crate::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::FetchError;

pub use response::{header_map_from_pairs, HttpResponse};

/// HTTP client stack used to perform the request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, ValueEnum, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// One hyper HTTP/1.1 connection over a tokio socket (tokio-rustls for https)
    HyperConnection,
    /// Async `reqwest::Client`
    Reqwest,
    /// `reqwest::blocking::Client`
    ReqwestBlocking,
    /// hyper-util pooled client with a hyper-rustls connector
    HyperUtil,
    /// `minreq` blocking client
    Minreq,
    /// `http_req` blocking client
    HttpReq,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::HyperConnection => "hyper-connection",
            Transport::Reqwest => "reqwest",
            Transport::ReqwestBlocking => "reqwest-blocking",
            Transport::HyperUtil => "hyper-util",
            Transport::Minreq => "minreq",
            Transport::HttpReq => "http-req",
        }
    }

    /// Whether the client blocks the calling thread.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            Transport::ReqwestBlocking | Transport::Minreq | Transport::HttpReq
        )
    }

    /// Whether the client can connect to a bracketed IPv6 literal host.
    ///
    /// minreq and http_req hand the host to the resolver with its brackets.
    pub fn supports_ipv6_literals(&self) -> bool {
        !matches!(self, Transport::Minreq | Transport::HttpReq)
    }
}

/// Settings shared by every transport.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Upper bound for the whole request, connect through body
    pub timeout: Duration,
    /// User-Agent header sent by every transport
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Performs one GET request to `url` using `transport`.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` for an IPv6 literal host the client
/// cannot reach, `FetchError::Timeout` if the request does not complete
/// within `settings.timeout`, or the client's own error otherwise.
pub async fn fetch(
    transport: Transport,
    url: &Url,
    settings: &ClientSettings,
) -> Result<HttpResponse, FetchError> {
    if let Some(Host::Ipv6(address)) = url.host() {
        if !transport.supports_ipv6_literals() {
            return Err(FetchError::InvalidUrl(format!(
                "{transport} cannot connect to IPv6 literal host [{address}]"
            )));
        }
    }

    debug!(
        "Sending GET {url} via {transport}{}",
        if transport.is_blocking() { " (blocking pool)" } else { "" }
    );

    let request = async {
        match transport {
            Transport::HyperConnection => hyper_connection::fetch(url, settings).await,
            Transport::Reqwest => reqwest_client::fetch(url, settings).await,
            Transport::ReqwestBlocking => reqwest_client::fetch_blocking(url, settings).await,
            Transport::HyperUtil => hyper_pooled::fetch(url, settings).await,
            Transport::Minreq => minreq_client::fetch(url, settings).await,
            Transport::HttpReq => http_req_client::fetch(url, settings).await,
        }
    };

    match tokio::time::timeout(settings.timeout, request).await {
        Ok(result) => {
            if let Ok(response) = &result {
                debug!(
                    "{transport} received status {} with {} header(s) and {} body byte(s)",
                    response.status,
                    response.headers.len(),
                    response.body.len()
                );
            }
            result
        }
        Err(_) => Err(FetchError::Timeout {
            transport: transport.to_string(),
            seconds: settings.timeout.as_secs(),
        }),
    }
}
