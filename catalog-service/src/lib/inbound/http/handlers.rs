use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::auth::errors::AuthError;
use crate::domain::author::errors::AuthorError;
use crate::domain::book::errors::BookError;

pub mod accounts;
pub mod authentication;
pub mod authors;
pub mod books;
pub mod read_root;

/// Detail returned for every bearer token rejection.
pub const INVALID_TOKEN_DETAIL: &str = "Could not validate credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Unauthorized(msg) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                    Json(ApiErrorBody { detail: msg }),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorBody { detail })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::BadRequest("Incorrect email or password".to_string())
            }
            AuthError::MalformedToken(_)
            | AuthError::Expired
            | AuthError::InvalidClaim
            | AuthError::UnknownSubject => ApiError::Unauthorized(INVALID_TOKEN_DETAIL.to_string()),
            AuthError::TokenIssuance(_) | AuthError::Repository(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidUsername(_) | AccountError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AccountError::NotFound(_) => ApiError::NotFound("Account not found".to_string()),
            AccountError::AlreadyExists => ApiError::Conflict(err.to_string()),
            AccountError::Forbidden => ApiError::Forbidden(err.to_string()),
            AccountError::PasswordHashing(_) | AccountError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthorError> for ApiError {
    fn from(err: AuthorError) -> Self {
        match err {
            AuthorError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthorError::NotFound(_) => ApiError::NotFound("Author not found".to_string()),
            AuthorError::NameAlreadyExists(_) => {
                ApiError::Conflict("Author name already exists".to_string())
            }
            AuthorError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidTitle(_) => ApiError::UnprocessableEntity(err.to_string()),
            BookError::NotFound(_) => ApiError::NotFound("Book not found".to_string()),
            BookError::AuthorNotFound(_) => ApiError::BadRequest("Author not found".to_string()),
            BookError::TitleAlreadyExists(_) => {
                ApiError::Conflict("Book title already exists".to_string())
            }
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Body of confirmations such as deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
