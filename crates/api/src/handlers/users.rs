//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use streambox_core::types::DbId;
use streambox_db::models::user::{UpdateUser, UserResponse};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::services::users;
use crate::state::AppState;

/// Request body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: Option<DbId>,
}

/// GET /users
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = users::list(&state.pool).await?;
    Ok(Json(DataResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /users/me
pub async fn me(RequireAuth(caller): RequireAuth) -> AppResult<Json<DataResponse<UserResponse>>> {
    Ok(Json(DataResponse::ok(caller.into())))
}

/// GET /users/{id}
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = users::get(&state.pool, id).await?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// PUT /users/{id}
///
/// Admin-only general update, including the role.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let update = UpdateUser {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        role_id: input.role_id,
    };
    let user = users::update(&state.pool, &admin, id, update).await?;
    Ok(Json(DataResponse::ok(user.into())))
}
