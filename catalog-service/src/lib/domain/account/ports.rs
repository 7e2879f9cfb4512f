use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::models::Username;
use crate::domain::pagination::Page;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username or email is already registered
    /// * `PasswordHashing` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn create_account(&self, command: CreateAccountCommand)
        -> Result<Account, AccountError>;

    /// List accounts ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_accounts(&self, page: Page) -> Result<Vec<Account>, AccountError>;

    /// Replace username, email and password of an account.
    ///
    /// # Arguments
    /// * `current` - Account performing the request
    /// * `id` - Account to update; must be `current`
    /// * `command` - New field values
    ///
    /// # Errors
    /// * `Forbidden` - `id` is not the acting account
    /// * `AlreadyExists` - New username or email belongs to another account
    /// * `NotFound` - Account vanished before the update landed
    /// * `DatabaseError` - Database operation failed
    async fn update_account(
        &self,
        current: &Account,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError>;

    /// Delete an account.
    ///
    /// # Errors
    /// * `Forbidden` - `id` is not the acting account
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, current: &Account, id: &AccountId)
        -> Result<(), AccountError>;
}

/// Persistence operations for account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account and return it with its assigned id.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username or email is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Look up an account by username.
    ///
    /// Takes the raw string so token subjects can be resolved without
    /// validating them as usernames first.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// First account whose username or email matches either argument.
    async fn find_by_username_or_email(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountError>;

    async fn list(&self, page: Page) -> Result<Vec<Account>, AccountError>;

    /// Store every field of an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `AlreadyExists` - Username or email is taken by another account
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}
