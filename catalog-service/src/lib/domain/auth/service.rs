use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::JwtError;
use auth::StoredCredentials;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::models::Account;
use crate::domain::account::ports::AccountRepository;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;

/// Login, refresh and bearer token resolution over the account store.
pub struct AuthService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AuthService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AR> AuthServicePort for AuthService<AR>
where
    AR: AccountRepository,
{
    async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let account = self.repository.find_by_username(username).await?;
        let candidate = account.as_ref().map(|account| StoredCredentials {
            subject: account.username.as_str(),
            password_hash: &account.password_hash,
        });

        match self.authenticator.authenticate(password, candidate, now) {
            Ok(token) => {
                tracing::info!(username = %username, "Login succeeded");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(username = %username, "Login rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::TokenIssuance(e.to_string())),
        }
    }

    async fn refresh(
        &self,
        account: &Account,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let token = self
            .authenticator
            .issue_token(account.username.as_str(), now)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;
        tracing::debug!(account_id = %account.id, "Access token refreshed");

        Ok(token)
    }

    async fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Account, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token, now)
            .map_err(|e| match e {
                JwtError::Expired => AuthError::Expired,
                other => AuthError::MalformedToken(other.to_string()),
            })?;

        let subject = claims.subject().ok_or(AuthError::InvalidClaim)?;

        self.repository
            .find_by_username(subject)
            .await?
            .ok_or(AuthError::UnknownSubject)
    }
}
