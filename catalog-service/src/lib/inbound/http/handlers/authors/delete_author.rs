use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::author::models::AuthorId;
use crate::domain::author::ports::AuthorServicePort;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .author_service
        .delete_author(&AuthorId(author_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Author deleted")))
}
