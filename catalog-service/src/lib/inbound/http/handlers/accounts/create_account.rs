use axum::extract::State;
use axum::http::StatusCode;

use super::AccountRequest;
use super::AccountResponseData;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::extract::Json;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<AccountRequest>,
) -> Result<ApiSuccess<AccountResponseData>, ApiError> {
    let (username, email, password) = req.into_parts()?;
    let command = CreateAccountCommand {
        username,
        email,
        password,
    };

    state
        .account_service
        .create_account(command)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}
