#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use auth::Authenticator;
use auth::Clock;
use auth::TokenCodec;
use auth::TokenSettings;
use catalog_service::config::DatabaseConfig;
use catalog_service::inbound::http::router::create_router;
use catalog_service::inbound::http::router::AppState;
use catalog_service::outbound::database;
use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;
use sqlx::SqlitePool;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Clock that only moves when a test advances it
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Whole-second start instant so token expiry lands exactly on the TTL.
    pub fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// Spawn the application on a random port over a fresh in-memory database
    pub async fn spawn() -> Self {
        let pool = database::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .expect("Failed to open in-memory database");

        database::MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let settings = TokenSettings::new(
            JWT_SECRET,
            "HS256",
            Duration::minutes(TOKEN_TTL_MINUTES),
        )
        .expect("Invalid token settings");
        let authenticator =
            Arc::new(Authenticator::new(&settings).expect("Failed to build authenticator"));
        let clock = Arc::new(ManualClock::new(Self::start_time()));

        let state = AppState::new(pool.clone(), authenticator, clock.clone());
        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
            clock,
            token_codec: TokenCodec::new(&settings),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.patch(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register an account and return its id
    pub async fn create_account(&self, username: &str, password: &str) -> i64 {
        let response = self
            .post("/accounts")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("Account id missing")
    }

    /// Submit the login form and return the raw response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the access token
    pub async fn access_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Token missing")
            .to_string()
    }

    /// Register an account and log in as it
    pub async fn signed_in(&self, username: &str) -> (i64, String) {
        let id = self.create_account(username, "pass_word!").await;
        let token = self.access_token(username, "pass_word!").await;
        (id, token)
    }

    /// Create an author and return its id
    pub async fn create_author(&self, token: &str, name: &str) -> i64 {
        let response = self
            .post_authenticated("/authors", token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("Author id missing")
    }

    /// Create a book and return its id
    pub async fn create_book(&self, token: &str, title: &str, year: i32, author_id: i64) -> i64 {
        let response = self
            .post_authenticated("/books", token)
            .json(&json!({ "title": title, "year": year, "author_id": author_id }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("Book id missing")
    }
}
