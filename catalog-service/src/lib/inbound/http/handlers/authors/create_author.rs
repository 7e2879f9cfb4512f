use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AuthorRequest;
use super::AuthorResponseData;
use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::inbound::http::extract::Json;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn create_author(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(req): Json<AuthorRequest>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    let name = CatalogName::new(&req.name).map_err(AuthorError::from)?;

    let author = state
        .author_service
        .create_author(CreateAuthorCommand { name })
        .await?;
    tracing::debug!(account_id = %current.account.id, author_id = %author.id, "Author added to catalog");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&author).into()))
}
