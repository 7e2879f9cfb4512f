use thiserror::Error;

/// Error type for JWT operations.
///
/// `MalformedToken` and `Expired` are kept apart so callers can tell a
/// forged or garbled token from one that merely outlived its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed or carries an invalid signature: {0}")]
    MalformedToken(String),

    #[error("Token is expired")]
    Expired,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Token lifetime must be positive")]
    InvalidLifetime,
}
