use axum::extract::State;
use axum::http::StatusCode;

use super::AuthorResponseData;
use crate::domain::author::models::AuthorId;
use crate::domain::author::ports::AuthorServicePort;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    state
        .author_service
        .get_author(&AuthorId(author_id))
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
