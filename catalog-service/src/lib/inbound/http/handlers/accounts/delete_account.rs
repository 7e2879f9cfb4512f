use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::account::models::AccountId;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(account_id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .account_service
        .delete_account(&current.account, &AccountId(account_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Account deleted")))
}
