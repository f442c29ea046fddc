//! Authentication and input checks that reject a request before any
//! database call. These run against a lazily-connecting pool.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use axum::http::{Method, Request, StatusCode};
use chrono::Utc;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use streambox_api::auth::jwt::Claims;

fn app() -> axum::Router {
    common::build_test_app(common::lazy_pool())
}

// ---------------------------------------------------------------------------
// Bearer token handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_is_401_with_challenge() {
    let response = get(app(), "/profile").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["detail"], "Missing Authorization header");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let request = Request::builder()
        .uri("/users/me")
        .header(AUTHORIZATION, "Basic YWxpY2U6cHcxMjM=")
        .body(Body::empty())
        .unwrap();
    let response = common::send_request(app(), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_401() {
    let response = get_auth(app(), "/profile", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid or expired token");
}

#[tokio::test]
async fn expired_token_is_401() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = get_auth(app(), "/reports/my", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_401() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        iat: now,
        exp: now + 600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = get_auth(app(), "/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_mutations_require_a_token() {
    let cases = [
        (Method::POST, "/videos"),
        (Method::PUT, "/videos/1"),
        (Method::DELETE, "/videos/1"),
        (Method::GET, "/my/albums"),
        (Method::POST, "/reports"),
        (Method::PUT, "/admin/reports/1/resolve"),
        (Method::DELETE, "/admin/users/2"),
    ];

    for (method, uri) in cases {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = common::send_request(app(), request).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should require a token"
        );
    }
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_rejects_invalid_email() {
    let response = post_json(
        app(),
        "/auth/register",
        json!({ "username": "alice", "email": "not-an-email", "password": "pw123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["detail"].as_str().unwrap().starts_with("email:"));
}

#[tokio::test]
async fn register_rejects_admin_role() {
    let response = post_json(
        app(),
        "/auth/register",
        json!({
            "username": "mallory",
            "email": "mallory@example.com",
            "password": "pw123",
            "role_id": 3
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Cannot self-register with the admin role");
}

#[tokio::test]
async fn register_rejects_short_password() {
    let response = post_json(
        app(),
        "/auth/register",
        json!({ "username": "bob", "email": "bob@example.com", "password": "abc" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_is_400_in_standard_shape() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let response = common::send_request(app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn login_rejects_blank_credentials() {
    let response = post_json(app(), "/auth/login", json!({ "username": "", "password": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn token_form_rejects_blank_credentials() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/token")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=&password="))
        .unwrap();
    let response = common::send_request(app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_requires_a_query() {
    let response = get(app(), "/videos/search").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Search query must not be empty");
}

#[tokio::test]
async fn token_is_checked_before_the_body() {
    let response = post_json_auth(app(), "/videos", json!({ "title": "" }), "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_numeric_path_id_is_400_json() {
    let response = get(app(), "/videos/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn non_numeric_user_id_is_400_json() {
    let response = get(app(), "/videos/user/x1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
