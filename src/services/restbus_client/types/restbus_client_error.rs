use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestBusClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response body was empty")]
    EmptyBody,
    #[error("resource not found")]
    ResourceNotFound,
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}
