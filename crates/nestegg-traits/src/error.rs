//! Error types for collaborator operations.

use thiserror::Error;

/// Common error type for collaborator operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Connection to external service failed or it answered with an error status
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Operation timed out
    #[error("timeout")]
    Timeout,

    /// Response could not be decoded
    #[error("parse error: {0}")]
    ParseError(String),

    /// Service answered but returned nothing usable
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication failed
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limited
    #[error("rate limited")]
    RateLimited,

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
