mod common;

use chrono::Duration;
use common::TestApp;
use common::TOKEN_TTL_MINUTES;
use reqwest::header;
use reqwest::Method;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_read_root() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Hello, World!" }));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.create_account("alice", "s3cret!").await;

    let response = app.login("alice", "s3cret!").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    let claims = app.token_codec.decode(token).unwrap();
    assert_eq!(claims.subject(), Some("alice"));
    assert_eq!(
        claims.exp,
        (TestApp::start_time() + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp()
    );
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.create_account("alice", "s3cret!").await;

    let wrong_password = app.login("alice", "wrong").await;
    let unknown_user = app.login("nobody", "wrong").await;

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status(), StatusCode::BAD_REQUEST);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, json!({ "detail": "Incorrect email or password" }));
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
async fn test_token_lifetime_window() {
    let app = TestApp::spawn().await;
    let (account_id, token) = app.signed_in("alice").await;
    let path = format!("/accounts/{}", account_id);
    let update = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "pass_word!"
    });

    app.clock.advance(Duration::minutes(29));
    let response = app
        .put_authenticated(&path, &token)
        .json(&update)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    app.clock.advance(Duration::minutes(2));
    let response = app
        .put_authenticated(&path, &token)
        .json(&update)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn test_token_expires_exactly_at_ttl() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in("alice").await;

    app.clock
        .advance(Duration::minutes(TOKEN_TTL_MINUTES) - Duration::seconds(1));
    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    app.clock.advance(Duration::seconds(1));
    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in("alice").await;

    app.clock.advance(Duration::minutes(10));
    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");

    let refreshed = body["access_token"].as_str().unwrap();
    let original_claims = app.token_codec.decode(&token).unwrap();
    let refreshed_claims = app.token_codec.decode(refreshed).unwrap();
    assert!(refreshed_claims.exp > original_claims.exp);
    assert_eq!(refreshed_claims.subject(), Some("alice"));

    // The original token is not revoked by refreshing
    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/refresh_token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Not authenticated" }));
}

#[tokio::test]
async fn test_every_gated_route_requires_a_token() {
    let app = TestApp::spawn().await;
    let gated = [
        (Method::POST, "/auth/refresh_token"),
        (Method::PUT, "/accounts/1"),
        (Method::DELETE, "/accounts/1"),
        (Method::POST, "/authors"),
        (Method::PATCH, "/authors/1"),
        (Method::DELETE, "/authors/1"),
        (Method::POST, "/books"),
        (Method::PATCH, "/books/1"),
        (Method::DELETE, "/books/1"),
    ];

    for (method, path) in gated {
        let response = app
            .api_client
            .request(method.clone(), format!("{}{}", app.address, path))
            .json(&json!({}))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {}",
            method,
            path
        );
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "detail": "Not authenticated" }));
    }
}

#[tokio::test]
async fn test_login_with_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/token")
        .form(&[("username", "alice")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_non_bearer_scheme_is_not_authenticated() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/refresh_token")
        .basic_auth("alice", Some("s3cret!"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_invalid_tokens_are_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in("alice").await;

    let (signed, signature) = token.rsplit_once('.').unwrap();
    let replacement = if signature.starts_with('A') { "B" } else { "A" };
    let tampered = format!("{}.{}{}", signed, replacement, &signature[1..]);

    let ghost = app.token_codec.issue("ghost", TestApp::start_time()).unwrap();
    let exp = (TestApp::start_time() + Duration::minutes(5)).timestamp();
    let anonymous = app.token_codec.encode(&json!({ "exp": exp })).unwrap();

    for bad_token in ["garbage", tampered.as_str(), ghost.as_str(), anonymous.as_str()] {
        let response = app
            .post_authenticated("/auth/refresh_token", bad_token)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["detail"], "Could not validate credentials");
    }
}

#[tokio::test]
async fn test_token_of_deleted_account_is_rejected() {
    let app = TestApp::spawn().await;
    let (account_id, token) = app.signed_in("alice").await;

    let response = app
        .delete_authenticated(&format!("/accounts/{}", account_id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
