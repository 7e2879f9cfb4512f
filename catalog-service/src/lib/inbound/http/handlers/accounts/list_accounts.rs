use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AccountListResponseData;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::pagination::Page;
use crate::inbound::http::extract::Query;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> Result<ApiSuccess<AccountListResponseData>, ApiError> {
    let accounts = state
        .account_service
        .list_accounts(Page::new(query.offset, query.limit))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AccountListResponseData {
            accounts: accounts.iter().map(Into::into).collect(),
        },
    ))
}
