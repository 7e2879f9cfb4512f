use axum::extract::State;
use axum::http::StatusCode;

use super::AuthorRequest;
use super::AuthorResponseData;
use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::inbound::http::extract::Json;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(req): Json<AuthorRequest>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    let name = CatalogName::new(&req.name).map_err(AuthorError::from)?;

    state
        .author_service
        .update_author(&AuthorId(author_id), UpdateAuthorCommand { name })
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
