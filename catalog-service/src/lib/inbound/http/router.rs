use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::Clock;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::create_account::create_account;
use super::handlers::accounts::delete_account::delete_account;
use super::handlers::accounts::list_accounts::list_accounts;
use super::handlers::accounts::update_account::update_account;
use super::handlers::authentication::login::login;
use super::handlers::authentication::refresh_token::refresh_token;
use super::handlers::authors::create_author::create_author;
use super::handlers::authors::delete_author::delete_author;
use super::handlers::authors::get_author::get_author;
use super::handlers::authors::list_authors::list_authors;
use super::handlers::authors::update_author::update_author;
use super::handlers::books::create_book::create_book;
use super::handlers::books::delete_book::delete_book;
use super::handlers::books::get_book::get_book;
use super::handlers::books::list_books::list_books;
use super::handlers::books::update_book::update_book;
use super::handlers::read_root::read_root;
use super::middleware::require_account;
use crate::domain::account::service::AccountService;
use crate::domain::auth::service::AuthService;
use crate::domain::author::service::AuthorService;
use crate::domain::book::service::BookService;
use crate::outbound::repositories::SqliteAccountRepository;
use crate::outbound::repositories::SqliteAuthorRepository;
use crate::outbound::repositories::SqliteBookRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteAccountRepository>>,
    pub account_service: Arc<AccountService<SqliteAccountRepository>>,
    pub author_service: Arc<AuthorService<SqliteAuthorRepository>>,
    pub book_service: Arc<BookService<SqliteBookRepository, SqliteAuthorRepository>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wire repositories and services over one connection pool.
    pub fn new(pool: SqlitePool, authenticator: Arc<Authenticator>, clock: Arc<dyn Clock>) -> Self {
        let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
        let author_repository = Arc::new(SqliteAuthorRepository::new(pool.clone()));
        let book_repository = Arc::new(SqliteBookRepository::new(pool));

        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&account_repository),
                authenticator,
            )),
            account_service: Arc::new(AccountService::new(account_repository)),
            author_service: Arc::new(AuthorService::new(Arc::clone(&author_repository))),
            book_service: Arc::new(BookService::new(book_repository, author_repository)),
            clock,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(read_root))
        .route("/auth/token", post(login))
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/authors", get(list_authors))
        .route("/authors/:author_id", get(get_author))
        .route("/books", get(list_books))
        .route("/books/:book_id", get(get_book));

    let protected_routes = Router::new()
        .route("/auth/refresh_token", post(refresh_token))
        .route(
            "/accounts/:account_id",
            put(update_account).delete(delete_account),
        )
        .route("/authors", post(create_author))
        .route(
            "/authors/:author_id",
            patch(update_author).delete(delete_author),
        )
        .route("/books", post(create_book))
        .route(
            "/books/:book_id",
            patch(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_account,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Headers must be marked sensitive before the trace span records them.
    let http_layers = ServiceBuilder::new()
        .layer(SetSensitiveRequestHeadersLayer::new([
            header::AUTHORIZATION,
            header::COOKIE,
        ]))
        .layer(trace_layer)
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(http_layers)
        .with_state(state)
}
