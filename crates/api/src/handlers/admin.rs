//! Handlers for the `/admin` resource (accounts, moderation, reports).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use streambox_core::status::UserStatus;
use streambox_core::types::DbId;
use streambox_db::models::report::Report;
use streambox_db::models::user::UserResponse;
use streambox_db::models::video::VideoResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::services::{admin, moderation};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize, Validate)]
pub struct RoleUpdateRequest {
    pub role_id: DbId,
}

/// Request body for `PUT /admin/users/{id}/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Request body for `PUT /admin/users/{id}/reset`.
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordResetRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = admin::list_users(&state.pool).await?;
    Ok(Json(DataResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// PUT /admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<RoleUpdateRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = admin::change_role(&state.pool, &actor, id, input.role_id).await?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// PUT /admin/users/{id}/status
///
/// Admin accounts cannot be suspended.
pub async fn change_status(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<StatusUpdateRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let status: UserStatus = input.status.parse()?;
    let user = admin::change_status(&state.pool, &actor, id, status).await?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// DELETE /admin/users/{id}
///
/// Suspends the account; admin accounts cannot be deleted.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<()>>> {
    admin::delete_user(&state.pool, &actor, id).await?;
    Ok(Json(DataResponse::empty()))
}

/// PUT /admin/users/{id}/reset
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<PasswordResetRequest>,
) -> AppResult<Json<DataResponse<()>>> {
    admin::reset_password(&state.pool, &actor, id, &input.new_password).await?;
    Ok(Json(DataResponse::empty()))
}

// ---------------------------------------------------------------------------
// Moderation
// ---------------------------------------------------------------------------

/// GET /admin/videos
///
/// Every video in any status.
pub async fn list_videos(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    Ok(Json(DataResponse::ok(moderation::list_videos(&state.pool).await?)))
}

/// DELETE /admin/videos/{id}
pub async fn remove_video(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<()>>> {
    moderation::remove_video(&state.pool, &actor, id).await?;
    Ok(Json(DataResponse::empty()))
}

/// GET /admin/reports
pub async fn list_reports(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    Ok(Json(DataResponse::ok(moderation::list_reports(&state.pool).await?)))
}

/// PUT /admin/reports/{id}/resolve
pub async fn resolve_report(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Report>>> {
    let report = moderation::resolve_report(&state.pool, &actor, id).await?;
    Ok(Json(DataResponse::ok(report)))
}
