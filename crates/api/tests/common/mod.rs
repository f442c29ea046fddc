//! Shared helpers for the api integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use streambox_api::auth::jwt::{generate_access_token, JwtConfig};
use streambox_api::config::ServerConfig;
use streambox_api::router::build_app_router;
use streambox_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

/// Build a test `ServerConfig` through the same parser `main.rs` uses.
///
/// CORS allows `http://localhost:3000` only.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "DATABASE_URL" => Some("postgres://streambox@127.0.0.1:1/streambox_test".to_string()),
        "CORS_ORIGINS" => Some("http://localhost:3000".to_string()),
        _ => None,
    })
    .expect("test config must parse")
}

/// A pool that never connects until a query runs. Requests that are rejected
/// before touching the database work without a running Postgres.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy(&test_config().database_url)
        .expect("lazy pool URL must parse")
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn jwt_config() -> JwtConfig {
    test_config().jwt
}

/// A signed token for `user_id` using the test secret.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &jwt_config()).expect("token generation")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn bare_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, bare_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, bare_request(Method::GET, uri, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, bare_request(Method::DELETE, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), &body)).await
}

/// Send an arbitrary request.
pub async fn send_request(app: Router, request: Request<Body>) -> Response<Body> {
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register through the API and return the login token.
pub async fn register_and_login(pool: &PgPool, username: &str, password: &str, role_id: i64) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/auth/register",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": password,
            "role_id": role_id,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "registration of {username} failed");

    login(pool, username, password).await
}

pub async fn login(pool: &PgPool, username: &str, password: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 200, "login of {username} failed");
    let json = body_json(response).await;
    json["data"]["access_token"].as_str().unwrap().to_string()
}
