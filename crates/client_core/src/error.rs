use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base url '{0}' cannot carry path segments")]
    CannotBeABase(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Transport failures and non-2xx responses both land here.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0} record has no identifier")]
    MissingId(&'static str),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request(err) | Self::HttpClient(err) => err.status(),
            _ => None,
        }
    }
}
