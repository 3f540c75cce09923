use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Everything that can go wrong between building a request URL and holding a decoded value.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, timeout, or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Any status outside 200..300.
    #[error("{url} answered with status {status}")]
    HttpStatus { url: Url, status: StatusCode },

    /// The body was not the JSON shape we asked for.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build URL for {endpoint}: {reason}")]
    MissingUrl { endpoint: String, reason: String },
}

impl FetchError {
    /// Short name of the failure kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode { .. } => "decode",
            FetchError::MissingUrl { .. } => "missing_url",
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_reports_code_and_kind() {
        let err = FetchError::HttpStatus {
            url: Url::parse("https://api.example.test/data/2.5/weather").unwrap(),
            status: StatusCode::UNAUTHORIZED,
        };

        assert_eq!(err.kind(), "http_status");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn missing_url_names_endpoint() {
        let err = FetchError::MissingUrl {
            endpoint: "forecast".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        assert_eq!(err.kind(), "missing_url");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("forecast"));
    }
}
