use serde::Deserialize;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Username;

pub mod create_account;
pub mod delete_account;
pub mod list_accounts;
pub mod update_account;

/// Request body shared by account creation and full replacement
#[derive(Deserialize)]
pub struct AccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AccountRequest {
    fn into_parts(self) -> Result<(Username, EmailAddress, String), AccountError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        Ok((username, email, self.password))
    }
}

/// Public view of an account; never includes the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountListResponseData {
    pub accounts: Vec<AccountResponseData>,
}
