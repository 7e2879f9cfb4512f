use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::account::models::Account;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const NOT_AUTHENTICATED_DETAIL: &str = "Not authenticated";

/// Account resolved from the request's bearer token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
}

/// Route layer admitting only requests whose bearer token resolves to an account
pub async fn require_account(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHENTICATED_DETAIL.to_string()))?
        .to_string();

    let account = state
        .auth_service
        .resolve(&token, state.clock.now())
        .await
        .map_err(|e| {
            match &e {
                AuthError::Repository(_) => {}
                rejection => tracing::warn!(reason = %rejection, "Bearer token rejected"),
            }
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(AuthenticatedAccount { account });

    Ok(next.run(req).await)
}

/// Credentials of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. Any other scheme, a missing
/// header or an empty credential yields `None`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = value.split_once(' ')?;
    let credentials = credentials.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !credentials.is_empty() {
        Some(credentials)
    } else {
        None
    }
}
