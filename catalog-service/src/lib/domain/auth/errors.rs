use thiserror::Error;

use crate::domain::account::errors::AccountError;

/// Failures of login, token refresh and bearer token resolution.
///
/// The four token variants are distinct here so they can be logged and
/// tested apart; callers outside the domain are expected to collapse them.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Bad signature, bad structure or wrong algorithm.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Token expired")]
    Expired,

    /// Token carries no usable subject.
    #[error("Token has no subject")]
    InvalidClaim,

    /// Subject names no existing account.
    #[error("Token subject does not match any account")]
    UnknownSubject,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Account lookup failed: {0}")]
    Repository(String),
}

impl From<AccountError> for AuthError {
    fn from(err: AccountError) -> Self {
        AuthError::Repository(err.to_string())
    }
}
