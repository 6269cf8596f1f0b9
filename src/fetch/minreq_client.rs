//! minreq transport.

use url::Url;

use crate::error_handling::FetchError;
use crate::fetch::{header_map_from_pairs, ClientSettings, HttpResponse};

pub(super) async fn fetch(url: &Url, settings: &ClientSettings) -> Result<HttpResponse, FetchError> {
    let url = url.to_string();
    let settings = settings.clone();

    tokio::task::spawn_blocking(move || -> Result<HttpResponse, FetchError> {
        let response = minreq::get(url)
            .with_header("User-Agent", settings.user_agent)
            .with_timeout(settings.timeout.as_secs().max(1))
            .send()?;

        let status = u16::try_from(response.status_code)
            .map_err(|_| FetchError::InvalidStatus(response.status_code))?;
        // minreq lowercases header names
        let headers = header_map_from_pairs(&response.headers);

        Ok(HttpResponse::from_bytes(status, headers, response.as_bytes()))
    })
    .await?
}
