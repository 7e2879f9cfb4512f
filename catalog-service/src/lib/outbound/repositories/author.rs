use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorFilter;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::NewAuthor;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::catalog_name::CatalogName;

pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn author_from_row(row: &SqliteRow) -> Result<Author, AuthorError> {
    let db_error = |e: sqlx::Error| AuthorError::DatabaseError(e.to_string());
    let name: String = row.try_get("name").map_err(db_error)?;

    Ok(Author {
        id: AuthorId(row.try_get("id").map_err(db_error)?),
        name: CatalogName::new(&name)?,
        created_at: row.try_get("created_at").map_err(db_error)?,
        updated_at: row.try_get("updated_at").map_err(db_error)?,
    })
}

fn write_error(e: sqlx::Error, name: &CatalogName) -> AuthorError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            AuthorError::NameAlreadyExists(name.to_string())
        }
        _ => AuthorError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn create(&self, author: NewAuthor) -> Result<Author, AuthorError> {
        let row = sqlx::query(
            r#"
            INSERT INTO authors (name, created_at, updated_at)
            VALUES (?1, ?2, ?2)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(author.name.as_str())
        .bind(author.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &author.name))?;

        author_from_row(&row)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        sqlx::query("SELECT id, name, created_at, updated_at FROM authors WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthorError::DatabaseError(e.to_string()))?
            .as_ref()
            .map(author_from_row)
            .transpose()
    }

    async fn list(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AuthorError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM authors
            WHERE (?1 IS NULL OR instr(name, ?1) > 0)
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(filter.name.as_ref().map(CatalogName::as_str))
        .bind(filter.page.limit())
        .bind(filter.page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        rows.iter().map(author_from_row).collect()
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let row = sqlx::query(
            r#"
            UPDATE authors
            SET name = ?1, updated_at = ?2
            WHERE id = ?3
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(author.name.as_str())
        .bind(author.updated_at)
        .bind(author.id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &author.name))?
        .ok_or(AuthorError::NotFound(author.id.0))?;

        author_from_row(&row)
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound(id.0));
        }

        Ok(())
    }
}
