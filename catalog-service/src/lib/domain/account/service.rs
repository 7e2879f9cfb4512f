use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::pagination::Page;

/// Domain service implementation for account operations.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        self.password_hasher
            .hash(password)
            .map_err(|e| AccountError::PasswordHashing(e.to_string()))
    }

    fn ensure_owner(current: &Account, id: &AccountId) -> Result<(), AccountError> {
        if current.id == *id {
            Ok(())
        } else {
            tracing::warn!(
                account_id = %current.id,
                target_account_id = %id,
                "Account tried to modify another account"
            );
            Err(AccountError::Forbidden)
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn create_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<Account, AccountError> {
        if self
            .repository
            .find_by_username_or_email(&command.username, &command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists);
        }

        let account = NewAccount {
            password_hash: self.hash_password(&command.password)?,
            username: command.username,
            email: command.email,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;
        tracing::info!(account_id = %created.id, username = %created.username, "Account created");

        Ok(created)
    }

    async fn list_accounts(&self, page: Page) -> Result<Vec<Account>, AccountError> {
        self.repository.list(page).await
    }

    async fn update_account(
        &self,
        current: &Account,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        Self::ensure_owner(current, id)?;

        let account = Account {
            id: *id,
            password_hash: self.hash_password(&command.password)?,
            username: command.username,
            email: command.email,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        let updated = self.repository.update(account).await?;
        tracing::info!(account_id = %updated.id, "Account updated");

        Ok(updated)
    }

    async fn delete_account(
        &self,
        current: &Account,
        id: &AccountId,
    ) -> Result<(), AccountError> {
        Self::ensure_owner(current, id)?;

        self.repository.delete(id).await?;
        tracing::info!(account_id = %id, "Account deleted");

        Ok(())
    }
}
