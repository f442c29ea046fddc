//! Role-based access control (RBAC) extractors.
//!
//! Each extractor resolves [`AuthUser`] first and then applies one of the
//! fixed [`RolePolicy`] allow-lists, rejecting with 403 on a mismatch.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use streambox_core::roles::{RolePolicy, ADMIN_ONLY, ADMIN_OR_CREATOR, ANY_ROLE, CREATOR_ONLY};
use streambox_db::models::user::User;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    policy: RolePolicy,
) -> Result<User, AppError> {
    let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;
    policy.check(user.role_id)?;
    Ok(user)
}

/// Requires the `admin` role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, ADMIN_ONLY).await.map(RequireAdmin)
    }
}

/// Requires the `creator` role. Admins are rejected too.
pub struct RequireCreator(pub User);

impl FromRequestParts<AppState> for RequireCreator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, CREATOR_ONLY).await.map(RequireCreator)
    }
}

/// Requires `creator` or `admin`.
pub struct RequireAdminOrCreator(pub User);

impl FromRequestParts<AppState> for RequireAdminOrCreator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, ADMIN_OR_CREATOR)
            .await
            .map(RequireAdminOrCreator)
    }
}

/// Requires any authenticated user with a known role.
///
/// Stricter than [`AuthUser`] only in that a row with an unknown `role_id`
/// is rejected.
pub struct RequireAuth(pub User);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, ANY_ROLE).await.map(RequireAuth)
    }
}
