use thiserror::Error;

use crate::domain::author::errors::AuthorError;
use crate::domain::catalog_name::CatalogNameError;

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book title: {0}")]
    InvalidTitle(#[from] CatalogNameError),

    #[error("Book not found: {0}")]
    NotFound(i64),

    /// The referenced author does not exist.
    #[error("Author not found: {0}")]
    AuthorNotFound(i64),

    #[error("Book title already exists: {0}")]
    TitleAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AuthorError> for BookError {
    fn from(err: AuthorError) -> Self {
        BookError::DatabaseError(err.to_string())
    }
}
