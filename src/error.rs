//! Error Types
//!
//! Failures of network-backed actions. Form validation problems are not
//! errors here; they live in `forms::Validation` and are shown inline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("request failed with status {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Server understood the request and said no
    #[error("rejected by server: {0}")]
    Rejected(String),

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("storage unavailable")]
    Storage,
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => UiError::Decode(e.to_string()),
            other => UiError::Network(other.to_string()),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;
