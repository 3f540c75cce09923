use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Generic GET-and-decode over a shared `reqwest::Client`.
///
/// Every call issues exactly one request with the default transport settings and resolves
/// exactly once. Only statuses in `200..300` count as success.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: Client,
}

impl FetchClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn with_http(http: Client) -> Self {
        Self { http }
    }

    /// GET `url` and decode the JSON body into `T`, keeping the failure kind.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let body = self.get_bytes(url.clone()).await?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url,
            source,
        })
    }

    /// GET `url` and return the raw body of a successful response.
    pub async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        debug!(%url, "GET");

        let res = match self.http.get(url.clone()).send().await {
            Ok(res) => res,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { url, status });
        }

        match res.bytes().await {
            Ok(body) => {
                debug!(%url, %status, len = body.len(), "response received");
                Ok(body.to_vec())
            }
            Err(source) => Err(FetchError::Transport { url, source }),
        }
    }

    /// Like [`FetchClient::get_json`], but any failure is logged and turned into `None`.
    pub async fn fetch_typed<T: DeserializeOwned>(&self, url: Url) -> Option<T> {
        discard_failure(self.get_json(url).await, std::any::type_name::<T>())
    }
}

/// Logs a failed fetch of `what` and drops the error.
pub(crate) fn discard_failure<T>(result: Result<T, FetchError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "fetching {what} failed");
            None
        }
    }
}
