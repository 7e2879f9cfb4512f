use async_trait::async_trait;
use auth::AccessToken;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::models::Account;
use crate::domain::auth::errors::AuthError;

/// Port for authentication operations.
///
/// Every operation takes the current instant explicitly; token validity
/// depends on nothing else.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange a username and password for an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `TokenIssuance` - Token could not be signed
    /// * `Repository` - Account lookup failed
    async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError>;

    /// Issue a fresh token for an already resolved account.
    ///
    /// Tokens issued earlier stay valid until their own expiry.
    ///
    /// # Errors
    /// * `TokenIssuance` - Token could not be signed
    async fn refresh(&self, account: &Account, now: DateTime<Utc>)
        -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token to the account it was issued for.
    ///
    /// # Errors
    /// * `MalformedToken` - Signature or structure invalid
    /// * `Expired` - `exp` is at or before `now`
    /// * `InvalidClaim` - Subject claim missing or empty
    /// * `UnknownSubject` - No account with that username
    /// * `Repository` - Account lookup failed
    async fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Account, AuthError>;
}
