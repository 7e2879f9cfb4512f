use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::catalog_name::CatalogName;
use crate::domain::pagination::Page;

/// Author aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: AuthorId,
    pub name: CatalogName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: CatalogName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateAuthorCommand {
    pub name: CatalogName,
}

#[derive(Debug)]
pub struct UpdateAuthorCommand {
    pub name: CatalogName,
}

/// Author listing criteria. `name` matches as a substring of the
/// normalized author name.
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter {
    pub name: Option<CatalogName>,
    pub page: Page,
}
