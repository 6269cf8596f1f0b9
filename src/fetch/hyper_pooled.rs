//! hyper-util legacy client transport.
//!
//! The higher-level hyper client: connector, pool and executor are assembled
//! once and the request is described declaratively.

use std::time::Duration;

use http::header::USER_AGENT;
use http::Request;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use url::Url;

use crate::config::CONNECT_TIMEOUT_SECS;
use crate::error_handling::FetchError;
use crate::fetch::{ClientSettings, HttpResponse};
use crate::initialization::init_tls_config;

pub(super) async fn fetch(url: &Url, settings: &ClientSettings) -> Result<HttpResponse, FetchError> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(Duration::from_secs(CONNECT_TIMEOUT_SECS)));

    let tls_config = init_tls_config()?;
    let connector = HttpsConnectorBuilder::new()
        .with_tls_config((*tls_config).clone())
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build(connector);

    let request = Request::get(url.as_str())
        .header(USER_AGENT, settings.user_agent.as_str())
        .body(Empty::<Bytes>::new())?;

    let response = client.request(request).await?;
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await?.to_bytes();

    Ok(HttpResponse::from_bytes(
        parts.status.as_u16(),
        parts.headers,
        &bytes,
    ))
}
