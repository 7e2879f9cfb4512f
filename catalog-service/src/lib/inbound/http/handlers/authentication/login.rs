use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::TokenResponseData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::extract::Form;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// OAuth2 password form (`application/x-www-form-urlencoded`).
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .login(&form.username, &form.password, state.clock.now())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}
