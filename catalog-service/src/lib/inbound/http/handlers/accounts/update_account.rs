use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AccountRequest;
use super::AccountResponseData;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::extract::Json;
use crate::inbound::http::extract::Path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn update_account(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(account_id): Path<i64>,
    Json(req): Json<AccountRequest>,
) -> Result<ApiSuccess<AccountResponseData>, ApiError> {
    let (username, email, password) = req.into_parts()?;
    let command = UpdateAccountCommand {
        username,
        email,
        password,
    };

    state
        .account_service
        .update_account(&current.account, &AccountId(account_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
