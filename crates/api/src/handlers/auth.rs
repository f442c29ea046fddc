//! Handlers for the `/auth` resource (register, login, OAuth2 token).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use streambox_core::roles::ROLE_CONSUMER;
use streambox_core::types::DbId;
use streambox_db::models::user::{User, UserResponse};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedForm, ValidatedJson};
use crate::response::DataResponse;
use crate::services::auth::{self as auth_service, Registration};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

fn default_role_id() -> DbId {
    ROLE_CONSUMER
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_role_id")]
    pub role_id: DbId,
}

/// Request body for `POST /auth/login`, and the form fields of `POST /auth/token`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Issued access token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<TokenUser>,
}

/// Public user info embedded in [`TokenResponse`].
#[derive(Debug, Serialize)]
pub struct TokenUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role_id: DbId,
}

impl From<&User> for TokenUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role_id: user.role_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create an account. Self-registration as admin is rejected.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let user = auth_service::register(
        &state.pool,
        Registration {
            username: input.username,
            email: input.email,
            password: input.password,
            first_name: input.first_name,
            last_name: input.last_name,
            role_id: input.role_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::ok(user.into()))))
}

/// POST /auth/login
///
/// Exchange username + password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<DataResponse<TokenResponse>>> {
    let user = auth_service::authenticate(&state.pool, &input.username, &input.password).await?;
    let mut token = issue_token(&state, &user)?;
    token.user = Some(TokenUser::from(&user));
    Ok(Json(DataResponse::ok(token)))
}

/// POST /auth/token
///
/// OAuth2 password flow: form-encoded `username` and `password`.
pub async fn token(
    State(state): State<AppState>,
    ValidatedForm(input): ValidatedForm<LoginRequest>,
) -> AppResult<Json<DataResponse<TokenResponse>>> {
    let user = auth_service::authenticate(&state.pool, &input.username, &input.password).await?;
    Ok(Json(DataResponse::ok(issue_token(&state, &user)?)))
}

fn issue_token(state: &AppState, user: &User) -> AppResult<TokenResponse> {
    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        user: None,
    })
}
