use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::pagination::Page;

pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn account_from_row(row: &SqliteRow) -> Result<Account, AccountError> {
    let db_error = |e: sqlx::Error| AccountError::DatabaseError(e.to_string());

    Ok(Account {
        id: AccountId(row.try_get("id").map_err(db_error)?),
        username: Username::new(row.try_get("username").map_err(db_error)?)?,
        email: EmailAddress::new(row.try_get("email").map_err(db_error)?)?,
        password_hash: row.try_get("password_hash").map_err(db_error)?,
        created_at: row.try_get("created_at").map_err(db_error)?,
        updated_at: row.try_get("updated_at").map_err(db_error)?,
    })
}

fn write_error(e: sqlx::Error) -> AccountError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => AccountError::AlreadyExists,
        _ => AccountError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let row = sqlx::query(
            r#"
            INSERT INTO accounts (username, email, password_hash, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        account_from_row(&row)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?
        .as_ref()
        .map(account_from_row)
        .transpose()
    }

    async fn find_by_username_or_email(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountError> {
        sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE username = ?1 OR email = ?2
            LIMIT 1
            "#,
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?
        .as_ref()
        .map(account_from_row)
        .transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM accounts
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        rows.iter().map(account_from_row).collect()
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let row = sqlx::query(
            r#"
            UPDATE accounts
            SET username = ?1, email = ?2, password_hash = ?3, updated_at = ?4
            WHERE id = ?5
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.updated_at)
        .bind(account.id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?
        .ok_or(AccountError::NotFound(account.id.0))?;

        account_from_row(&row)
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.0));
        }

        Ok(())
    }
}
