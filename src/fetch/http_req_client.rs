//! http_req transport.
//!
//! The request builder carries its own connect, read and overall deadlines,
//! so the blocking thread gives up on a silent server at the same time as the
//! outer timeout in `fetch::fetch`.

use std::time::Duration;

use http_req::request::Request;
use http_req::uri::Uri;
use url::Url;

use crate::config::CONNECT_TIMEOUT_SECS;
use crate::error_handling::FetchError;
use crate::fetch::{header_map_from_pairs, ClientSettings, HttpResponse};

pub(super) async fn fetch(url: &Url, settings: &ClientSettings) -> Result<HttpResponse, FetchError> {
    let url = url.to_string();
    let settings = settings.clone();

    tokio::task::spawn_blocking(move || -> Result<HttpResponse, FetchError> {
        let uri = Uri::try_from(url.as_str()).map_err(http_req::error::Error::from)?;
        let connect_timeout = Duration::from_secs(CONNECT_TIMEOUT_SECS).min(settings.timeout);

        let mut body = Vec::new();
        let response = Request::new(&uri)
            .connect_timeout(Some(connect_timeout))
            .read_timeout(Some(settings.timeout))
            .write_timeout(Some(settings.timeout))
            .timeout(settings.timeout)
            .header("User-Agent", &settings.user_agent)
            .send(&mut body)?;

        let status = u16::from(response.status_code());
        let headers = header_map_from_pairs(
            response
                .headers()
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone())),
        );

        Ok(HttpResponse::from_bytes(status, headers, &body))
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorCategory;

    #[tokio::test]
    async fn test_silent_server_ends_blocking_request() {
        // Accepts connections but never writes a response
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let url = Url::parse(&format!("http://{addr}/users/1")).unwrap();
        let settings = ClientSettings {
            timeout: Duration::from_secs(1),
            ..ClientSettings::default()
        };

        // No outer deadline from fetch::fetch here, only the client's own
        let result = tokio::time::timeout(Duration::from_secs(5), fetch(&url, &settings))
            .await
            .expect("http_req should give up on its own");
        let err = result.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Timeout, "{err:?}");

        silent.abort();
    }
}
