use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::BookListResponseData;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookFilter;
use crate::domain::book::ports::BookServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::domain::pagination::Page;
use crate::inbound::http::extract::Query;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListBooksQuery {
    fn try_into_filter(self) -> Result<BookFilter, BookError> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .map(|title| CatalogName::new(&title))
            .transpose()?;

        Ok(BookFilter {
            title,
            year: self.year,
            page: Page::new(self.offset, self.limit),
        })
    }
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ApiSuccess<BookListResponseData>, ApiError> {
    let filter = query.try_into_filter()?;
    let books = state.book_service.list_books(filter).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        BookListResponseData {
            books: books.iter().map(Into::into).collect(),
        },
    ))
}
