//! Handlers for the `/profile` resource. Every route acts on the caller.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use streambox_db::models::user::{UpdateProfile, UserResponse};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::services::profile;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /profile`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `PUT /profile/password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Request body for `PUT /profile/picture`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePictureRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub profile_picture: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /profile
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = profile::get(&state.pool, &caller).await?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// PUT /profile
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedJson(input): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let update = UpdateProfile {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
    };
    let user = profile::update(&state.pool, &caller, update).await?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// PUT /profile/password
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedJson(input): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<DataResponse<()>>> {
    profile::change_password(
        &state.pool,
        &caller,
        &input.current_password,
        &input.new_password,
    )
    .await?;
    Ok(Json(DataResponse::empty()))
}

/// PUT /profile/picture
pub async fn update_picture(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedJson(input): ValidatedJson<UpdatePictureRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = profile::update_picture(&state.pool, &caller, &input.profile_picture).await?;
    Ok(Json(DataResponse::ok(user.into())))
}
