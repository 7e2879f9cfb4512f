use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::author::models::AuthorId;
use crate::domain::catalog_name::CatalogName;
use crate::domain::pagination::Page;

/// Book aggregate entity.
///
/// Always belongs to an existing author.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: CatalogName,
    pub year: i32,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: CatalogName,
    pub year: i32,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: CatalogName,
    pub year: i32,
    pub author_id: AuthorId,
}

/// Partial update; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateBookCommand {
    pub title: Option<CatalogName>,
    pub year: Option<i32>,
    pub author_id: Option<AuthorId>,
}

/// Book listing criteria. `title` matches as a substring of the normalized
/// title, `year` exactly.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<CatalogName>,
    pub year: Option<i32>,
    pub page: Page,
}
