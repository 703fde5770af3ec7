use thiserror::Error;

/// Errors from one scoring-service call. Every variant is rendered as a
/// transport failure on the affected row; none is fatal to the client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {code}")]
    Status { code: u16 },

    #[error("service returned an empty response")]
    EmptyResponse,
}
