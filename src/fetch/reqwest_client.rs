//! reqwest transports, async and blocking.

use url::Url;

use crate::error_handling::FetchError;
use crate::fetch::{ClientSettings, HttpResponse};
use crate::initialization::{init_blocking_client, init_client};

pub(super) async fn fetch(url: &Url, settings: &ClientSettings) -> Result<HttpResponse, FetchError> {
    let client = init_client(settings)?;
    let response = client.get(url.as_str()).send().await?;

    // Headers must be captured before `bytes()` consumes the response.
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    Ok(HttpResponse::from_bytes(status, headers, &body))
}

pub(super) async fn fetch_blocking(
    url: &Url,
    settings: &ClientSettings,
) -> Result<HttpResponse, FetchError> {
    let url = url.clone();
    let settings = settings.clone();

    tokio::task::spawn_blocking(move || -> Result<HttpResponse, FetchError> {
        let client = init_blocking_client(&settings)?;
        let response = client.get(url.as_str()).send()?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(HttpResponse::from_bytes(status, headers, &body))
    })
    .await?
}
