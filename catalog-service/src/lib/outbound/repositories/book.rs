use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::NewBook;
use crate::domain::book::ports::BookRepository;
use crate::domain::catalog_name::CatalogName;

pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn book_from_row(row: &SqliteRow) -> Result<Book, BookError> {
    let db_error = |e: sqlx::Error| BookError::DatabaseError(e.to_string());
    let title: String = row.try_get("title").map_err(db_error)?;

    Ok(Book {
        id: BookId(row.try_get("id").map_err(db_error)?),
        title: CatalogName::new(&title)?,
        year: row.try_get("year").map_err(db_error)?,
        author_id: AuthorId(row.try_get("author_id").map_err(db_error)?),
        created_at: row.try_get("created_at").map_err(db_error)?,
        updated_at: row.try_get("updated_at").map_err(db_error)?,
    })
}

fn write_error(e: sqlx::Error, title: &CatalogName, author_id: AuthorId) -> BookError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            BookError::TitleAlreadyExists(title.to_string())
        }
        // The author was deleted between the existence check and the write.
        Some(db_err) if db_err.is_foreign_key_violation() => {
            BookError::AuthorNotFound(author_id.0)
        }
        _ => BookError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (title, year, author_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, title, year, author_id, created_at, updated_at
            "#,
        )
        .bind(book.title.as_str())
        .bind(book.year)
        .bind(book.author_id.0)
        .bind(book.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &book.title, book.author_id))?;

        book_from_row(&row)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        sqlx::query(
            r#"
            SELECT id, title, year, author_id, created_at, updated_at
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?
        .as_ref()
        .map(book_from_row)
        .transpose()
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, year, author_id, created_at, updated_at
            FROM books
            WHERE (?1 IS NULL OR instr(title, ?1) > 0)
              AND (?2 IS NULL OR year = ?2)
            ORDER BY id
            LIMIT ?3 OFFSET ?4
            "#,
        )
        .bind(filter.title.as_ref().map(CatalogName::as_str))
        .bind(filter.year)
        .bind(filter.page.limit())
        .bind(filter.page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.iter().map(book_from_row).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let row = sqlx::query(
            r#"
            UPDATE books
            SET title = ?1, year = ?2, author_id = ?3, updated_at = ?4
            WHERE id = ?5
            RETURNING id, title, year, author_id, created_at, updated_at
            "#,
        )
        .bind(book.title.as_str())
        .bind(book.year)
        .bind(book.author_id.0)
        .bind(book.updated_at)
        .bind(book.id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &book.title, book.author_id))?
        .ok_or(BookError::NotFound(book.id.0))?;

        book_from_row(&row)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.0));
        }

        Ok(())
    }
}
