//! Self-service profile operations for the authenticated caller.

use streambox_core::validation::{validate_password, validate_required};
use streambox_db::models::user::{UpdateProfile, User};
use streambox_db::repositories::user_repo::PROFILE_UPDATE_OK;
use streambox_db::repositories::UserRepo;
use streambox_db::DbPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::services::users;

/// Current stored profile of the caller.
pub async fn get(pool: &DbPool, caller: &User) -> AppResult<User> {
    users::get(pool, caller.id).await
}

/// Update name and contact fields. The procedure reports conflicts as a
/// message, which is returned to the client as a 400.
pub async fn update(pool: &DbPool, caller: &User, input: UpdateProfile) -> AppResult<User> {
    let message = UserRepo::update_profile(pool, caller.id, &input).await?;
    if message != PROFILE_UPDATE_OK {
        return Err(AppError::BadRequest(message));
    }
    tracing::info!(user_id = caller.id, "Profile updated");
    get(pool, caller).await
}

/// Replace the caller's password after checking the current one.
pub async fn change_password(
    pool: &DbPool,
    caller: &User,
    current_password: &str,
    new_password: &str,
) -> AppResult<()> {
    let user = get(pool, caller).await?;

    let matches = verify_password(current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matches {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }
    validate_password(new_password)?;

    let hash = hash_password(new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password_hash(pool, user.id, &hash).await?;
    tracing::info!(user_id = user.id, "Password changed");
    Ok(())
}

pub async fn update_picture(pool: &DbPool, caller: &User, profile_picture: &str) -> AppResult<User> {
    validate_required("profile_picture", profile_picture)?;
    UserRepo::update_profile_picture(pool, caller.id, profile_picture.trim()).await?;
    tracing::info!(user_id = caller.id, "Profile picture updated");
    get(pool, caller).await
}
