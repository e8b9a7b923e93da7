use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request not successful, status: {status}, url: '{url}'")]
    RequestNotOk { status: StatusCode, url: String },
    #[error("Failed to decode response body: '{0}'")]
    Decode(#[from] serde_json::Error),
    #[error("Api key is not a valid header value: '{0}'")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Provider still reports more pages after {limit} pages for keyword: '{keyword}'")]
    PageLimitExceeded { keyword: String, limit: u32 },
}

/// Check the status of a provider response and decode its json body.
///
/// The body is read as text first so that error responses can be logged
/// and decoding failures surface as [`Error::Decode`].
pub(crate) async fn decode_response<T>(resp: reqwest::Response) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await?;
    if !status.is_success() {
        log::error!(
            "Request not successful, status code: {}, url: {}, body: {}",
            status,
            url,
            body
        );
        return Err(Error::RequestNotOk { status, url });
    }
    Ok(serde_json::from_str(&body)?)
}
