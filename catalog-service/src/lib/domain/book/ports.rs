use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `AuthorNotFound` - `author_id` references no author
    /// * `TitleAlreadyExists` - Another book has the same normalized title
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `AuthorNotFound` - New `author_id` references no author
    /// * `TitleAlreadyExists` - Another book has the new title
    /// * `DatabaseError` - Database operation failed
    async fn update_book(&self, id: &BookId, command: UpdateBookCommand)
        -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn create(&self, book: NewBook) -> Result<Book, BookError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Books matching the filter, ordered by id.
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;

    async fn update(&self, book: Book) -> Result<Book, BookError>;

    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
