use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::author::models::AuthorId;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;

/// Domain service implementation for book operations.
///
/// Reads the author store to reject books pointing at missing authors
/// before the foreign key would.
pub struct BookService<BR, AR>
where
    BR: BookRepository,
    AR: AuthorRepository,
{
    repository: Arc<BR>,
    author_repository: Arc<AR>,
}

impl<BR, AR> BookService<BR, AR>
where
    BR: BookRepository,
    AR: AuthorRepository,
{
    pub fn new(repository: Arc<BR>, author_repository: Arc<AR>) -> Self {
        Self {
            repository,
            author_repository,
        }
    }

    async fn ensure_author_exists(&self, author_id: &AuthorId) -> Result<(), BookError> {
        match self.author_repository.find_by_id(author_id).await? {
            Some(_) => Ok(()),
            None => Err(BookError::AuthorNotFound(author_id.0)),
        }
    }
}

#[async_trait]
impl<BR, AR> BookServicePort for BookService<BR, AR>
where
    BR: BookRepository,
    AR: AuthorRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        self.ensure_author_exists(&command.author_id).await?;

        let book = self
            .repository
            .create(NewBook {
                title: command.title,
                year: command.year,
                author_id: command.author_id,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(book_id = %book.id, author_id = %book.author_id, "Book created");

        Ok(book)
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.0))
    }

    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError> {
        self.repository.list(&filter).await
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self.get_book(id).await?;

        if let Some(author_id) = command.author_id {
            self.ensure_author_exists(&author_id).await?;
            book.author_id = author_id;
        }

        if let Some(title) = command.title {
            book.title = title;
        }

        if let Some(year) = command.year {
            book.year = year;
        }

        book.updated_at = Utc::now();

        let updated = self.repository.update(book).await?;
        tracing::info!(book_id = %updated.id, "Book updated");

        Ok(updated)
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.repository.delete(id).await?;
        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::author::errors::AuthorError;
    use crate::domain::author::models::Author;
    use crate::domain::author::models::AuthorFilter;
    use crate::domain::author::models::NewAuthor;
    use crate::domain::catalog_name::CatalogName;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: NewBook) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    mock! {
        pub TestAuthorRepository {}

        #[async_trait]
        impl AuthorRepository for TestAuthorRepository {
            async fn create(&self, author: NewAuthor) -> Result<Author, AuthorError>;
            async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;
            async fn list(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AuthorError>;
            async fn update(&self, author: Author) -> Result<Author, AuthorError>;
            async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
        }
    }

    fn author(id: i64) -> Author {
        Author {
            id: AuthorId(id),
            name: CatalogName::new("clarice lispector").unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn book(id: i64, author_id: i64) -> Book {
        Book {
            id: BookId(id),
            title: CatalogName::new("a hora da estrela").unwrap(),
            year: 1977,
            author_id: AuthorId(author_id),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn known_authors(ids: &'static [i64]) -> MockTestAuthorRepository {
        let mut authors = MockTestAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(move |id| Ok(ids.contains(&id.0).then(|| author(id.0))));
        authors
    }

    #[tokio::test]
    async fn test_create_book() {
        let mut books = MockTestBookRepository::new();
        books
            .expect_create()
            .withf(|book| book.title.as_str() == "a hora da estrela" && book.year == 1977)
            .times(1)
            .returning(|book| {
                Ok(Book {
                    id: BookId(1),
                    title: book.title,
                    year: book.year,
                    author_id: book.author_id,
                    created_at: book.created_at,
                    updated_at: book.created_at,
                })
            });

        let service = BookService::new(Arc::new(books), Arc::new(known_authors(&[1])));

        let created = service
            .create_book(CreateBookCommand {
                title: CatalogName::new("A Hora da Estrela").unwrap(),
                year: 1977,
                author_id: AuthorId(1),
            })
            .await
            .unwrap();

        assert_eq!(created.id, BookId(1));
        assert_eq!(created.author_id, AuthorId(1));
    }

    #[tokio::test]
    async fn test_create_book_with_missing_author() {
        let mut books = MockTestBookRepository::new();
        books.expect_create().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(known_authors(&[1])));

        let result = service
            .create_book(CreateBookCommand {
                title: CatalogName::new("orphan").unwrap(),
                year: 2000,
                author_id: AuthorId(99),
            })
            .await;

        assert!(matches!(result, Err(BookError::AuthorNotFound(99))));
    }

    #[tokio::test]
    async fn test_update_book_changes_only_given_fields() {
        let mut books = MockTestBookRepository::new();
        books
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id.0, 1))));
        books
            .expect_update()
            .withf(|book| {
                book.year == 1978
                    && book.title.as_str() == "a hora da estrela"
                    && book.author_id == AuthorId(2)
            })
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(books), Arc::new(known_authors(&[1, 2])));

        let updated = service
            .update_book(
                &BookId(4),
                UpdateBookCommand {
                    year: Some(1978),
                    author_id: Some(AuthorId(2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, BookId(4));
    }

    #[tokio::test]
    async fn test_update_book_with_missing_author() {
        let mut books = MockTestBookRepository::new();
        books
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id.0, 1))));
        books.expect_update().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(known_authors(&[1])));

        let result = service
            .update_book(
                &BookId(4),
                UpdateBookCommand {
                    author_id: Some(AuthorId(7)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(BookError::AuthorNotFound(7))));
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let mut books = MockTestBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(None));

        let service = BookService::new(Arc::new(books), Arc::new(known_authors(&[1])));

        let result = service
            .update_book(&BookId(4), UpdateBookCommand::default())
            .await;

        assert!(matches!(result, Err(BookError::NotFound(4))));
    }
}
