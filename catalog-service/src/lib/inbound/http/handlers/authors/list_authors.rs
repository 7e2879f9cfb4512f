use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AuthorListResponseData;
use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::AuthorFilter;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::catalog_name::CatalogName;
use crate::domain::pagination::Page;
use crate::inbound::http::extract::Query;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAuthorsQuery {
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListAuthorsQuery {
    fn try_into_filter(self) -> Result<AuthorFilter, AuthorError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .map(|name| CatalogName::new(&name))
            .transpose()?;

        Ok(AuthorFilter {
            name,
            page: Page::new(self.offset, self.limit),
        })
    }
}

pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<ListAuthorsQuery>,
) -> Result<ApiSuccess<AuthorListResponseData>, ApiError> {
    let filter = query.try_into_filter()?;
    let authors = state.author_service.list_authors(filter).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthorListResponseData {
            authors: authors.iter().map(Into::into).collect(),
        },
    ))
}
