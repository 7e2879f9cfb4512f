use async_trait::async_trait;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorFilter;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::NewAuthor;
use crate::domain::author::models::UpdateAuthorCommand;

/// Port for author domain service operations.
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `NameAlreadyExists` - Another author has the same normalized name
    /// * `DatabaseError` - Database operation failed
    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    async fn list_authors(&self, filter: AuthorFilter) -> Result<Vec<Author>, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `NameAlreadyExists` - Another author has the new name
    /// * `DatabaseError` - Database operation failed
    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError>;

    /// Delete an author together with all of its books.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError>;
}

/// Persistence operations for author aggregate.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    async fn create(&self, author: NewAuthor) -> Result<Author, AuthorError>;

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    /// Authors matching the filter, ordered by id.
    async fn list(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AuthorError>;

    async fn update(&self, author: Author) -> Result<Author, AuthorError>;

    /// Remove an author; its books go with it.
    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
}
