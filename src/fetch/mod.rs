mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::FetchError;
use tracing::debug;

/// Issues a GET for `url` and returns the body of a successful response.
///
/// `subject` names what is being fetched (the city query) and ends up in
/// [`FetchError::CityNotFound`] when the upstream answers 404.
pub async fn fetch_bytes<C: HttpClient>(
    client: &C,
    url: &str,
    subject: &str,
) -> Result<Vec<u8>, FetchError> {
    let url = url
        .parse()
        .map_err(|e| FetchError::Document(format!("invalid url {url}: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        debug!(%status, subject, "Upstream returned an error status");
        return Err(FetchError::from_status(status, subject));
    }

    Ok(resp.bytes().await?.to_vec())
}
