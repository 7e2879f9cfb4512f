use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::BookResponseData;
use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::inbound::http::extract::Json;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub year: i32,
    pub author_id: i64,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, BookError> {
        Ok(CreateBookCommand {
            title: CatalogName::new(&self.title)?,
            year: self.year,
            author_id: AuthorId(self.author_id),
        })
    }
}

pub async fn create_book(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(req): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let command = req.try_into_command()?;

    let book = state.book_service.create_book(command).await?;
    tracing::debug!(account_id = %current.account.id, book_id = %book.id, "Book added to catalog");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&book).into()))
}
