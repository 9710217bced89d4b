pub mod http_fetcher;
#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// GET `url` and return the response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// GET `url` and parse the body as JSON.
///
/// Transport and parse failures are returned unchanged; there is no retry.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &(dyn Fetcher + Send + Sync),
    url: &str,
) -> Result<T> {
    let body = fetcher.fetch(url).await?;
    let value = serde_json::from_slice(&body)?;
    Ok(value)
}
