use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::BookResponseData;
use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::inbound::http::extract::Json;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Partial book update; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub author_id: Option<i64>,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, BookError> {
        let title = self
            .title
            .map(|title| CatalogName::new(&title))
            .transpose()?;

        Ok(UpdateBookCommand {
            title,
            year: self.year,
            author_id: self.author_id.map(AuthorId),
        })
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .book_service
        .update_book(&BookId(book_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
