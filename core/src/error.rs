//! Error types for the Rocket.Chat client.
//!
//! # Design
//! Remote failures (4xx/5xx, `"success": false` bodies) are not errors here:
//! they come back as an `HttpResponse` for the caller to inspect. `ApiError`
//! only covers what goes wrong on this side of the wire.

use thiserror::Error;

/// Errors returned by `RocketChatClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the round-trip (connect, TLS,
    /// timeout, ...). The original transport error is kept as the source.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A response body could not be decoded into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The operation exists in the remote API but this client does not
    /// implement it. No request is sent.
    #[error("{0} is not supported by this client")]
    Unsupported(&'static str),

    /// A wrapper needed at least one identifier and got none. No request is
    /// sent.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

impl ApiError {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ApiError::Transport(Box::new(err))
    }

    /// True when the failure happened locally and nothing was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Unsupported(_) | ApiError::MissingArgument(_) | ApiError::Serialization(_)
        )
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
