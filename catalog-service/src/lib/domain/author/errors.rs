use thiserror::Error;

use crate::domain::catalog_name::CatalogNameError;

/// Top-level error for all author-related operations
#[derive(Debug, Clone, Error)]
pub enum AuthorError {
    #[error("Invalid author name: {0}")]
    InvalidName(#[from] CatalogNameError),

    #[error("Author not found: {0}")]
    NotFound(i64),

    #[error("Author name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
