//! Single-connection transport.
//!
//! Opens a TCP socket itself, wraps it in `tokio-rustls` for https, and hands
//! the stream to hyper's HTTP/1.1 connection API. The connection is used for
//! exactly one request and dropped afterwards.

use std::time::Duration;

use http::header::{HOST, USER_AGENT};
use http::{Method, Request};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_util::rt::TokioIo;
use log::{debug, trace};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use url::{Position, Url};

use crate::config::CONNECT_TIMEOUT_SECS;
use crate::error_handling::FetchError;
use crate::fetch::{ClientSettings, HttpResponse, Transport};
use crate::initialization::init_tls_config;

pub(super) async fn fetch(url: &Url, settings: &ClientSettings) -> Result<HttpResponse, FetchError> {
    let host = url
        .host_str()
        .ok_or_else(|| FetchError::InvalidUrl(format!("{url} has no host")))?
        .to_string();
    let port = url
        .port_or_known_default()
        .ok_or_else(|| FetchError::InvalidUrl(format!("{url} has no port")))?;

    let authority = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.clone(),
    };
    let request = Request::builder()
        .method(Method::GET)
        .uri(&url[Position::BeforePath..Position::AfterQuery])
        .header(HOST, authority)
        .header(USER_AGENT, settings.user_agent.as_str())
        .body(Empty::<Bytes>::new())?;

    debug!("Connecting to {host}:{port}");
    // IPv6 literals come bracketed from the URL
    let connect_host = host.trim_start_matches('[').trim_end_matches(']');
    let stream = match tokio::time::timeout(
        Duration::from_secs(CONNECT_TIMEOUT_SECS),
        TcpStream::connect((connect_host, port)),
    )
    .await
    {
        Ok(result) => result?,
        Err(_) => {
            return Err(FetchError::Timeout {
                transport: Transport::HyperConnection.to_string(),
                seconds: CONNECT_TIMEOUT_SECS,
            })
        }
    };

    match url.scheme() {
        "https" => {
            let server_name = ServerName::try_from(connect_host.to_string())
                .map_err(|_| FetchError::InvalidServerName(host.clone()))?;
            let connector = TlsConnector::from(init_tls_config()?);
            let tls_stream = connector.connect(server_name, stream).await?;
            trace!("TLS handshake with {host} complete");
            send_over(TokioIo::new(tls_stream), request).await
        }
        "http" => send_over(TokioIo::new(stream), request).await,
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme {other:?}"
        ))),
    }
}

async fn send_over<T>(io: T, request: Request<Empty<Bytes>>) -> Result<HttpResponse, FetchError>
where
    T: hyper::rt::Read + hyper::rt::Write + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(io).await?;

    // The connection future drives the socket; it ends when the sender is dropped.
    let driver = tokio::spawn(async move {
        if let Err(e) = connection.await {
            debug!("Connection closed with error: {e}");
        }
    });

    let response = sender.send_request(request).await?;
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await?.to_bytes();

    drop(sender);
    driver.abort();

    Ok(HttpResponse::from_bytes(
        parts.status.as_u16(),
        parts.headers,
        &bytes,
    ))
}
