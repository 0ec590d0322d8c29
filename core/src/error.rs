//! Error types for the ENSEK API client.
//!
//! # Design
//! HTTP status codes are never mapped to errors here. A 401 or 404 is a
//! normal `HttpResponse` that the caller asserts on. `ApiError` covers only
//! the things that stop a request from producing a response at all.

use thiserror::Error;

/// Errors returned by `ApiClient` and its transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The client was used after `dispose()`.
    #[error("client has been disposed")]
    Disposed,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}
