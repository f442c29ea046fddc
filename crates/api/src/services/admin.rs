//! Account administration. Admin accounts are protected from status changes
//! and deletion.

use streambox_core::access::ensure_not_admin_target;
use streambox_core::roles::Role;
use streambox_core::status::UserStatus;
use streambox_core::types::DbId;
use streambox_core::validation::validate_password;
use streambox_db::models::user::User;
use streambox_db::repositories::UserRepo;
use streambox_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::services::users;

pub async fn list_users(pool: &DbPool) -> AppResult<Vec<User>> {
    users::list(pool).await
}

pub async fn change_role(pool: &DbPool, actor: &User, id: DbId, role_id: DbId) -> AppResult<User> {
    let role = Role::try_from(role_id)?;
    users::get(pool, id).await?;

    UserRepo::change_role(pool, id, role.id()).await?;
    tracing::info!(user_id = id, role = role.name(), actor_id = actor.id, "User role changed");
    users::get(pool, id).await
}

pub async fn change_status(
    pool: &DbPool,
    actor: &User,
    id: DbId,
    status: UserStatus,
) -> AppResult<User> {
    let target = users::get(pool, id).await?;
    ensure_not_admin_target(target.role_id, "change the status of")?;

    UserRepo::change_status(pool, id, status.as_str()).await?;
    tracing::info!(user_id = id, status = %status, actor_id = actor.id, "User status changed");
    users::get(pool, id).await
}

/// "Delete" an account by suspending it. The row is kept.
pub async fn delete_user(pool: &DbPool, actor: &User, id: DbId) -> AppResult<()> {
    let target = users::get(pool, id).await?;
    ensure_not_admin_target(target.role_id, "delete")?;

    UserRepo::change_status(pool, id, UserStatus::Suspended.as_str()).await?;
    tracing::info!(user_id = id, actor_id = actor.id, "User deleted (suspended)");
    Ok(())
}

pub async fn reset_password(pool: &DbPool, actor: &User, id: DbId, new_password: &str) -> AppResult<()> {
    users::get(pool, id).await?;
    validate_password(new_password)?;

    let hash = hash_password(new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password_hash(pool, id, &hash).await?;
    tracing::info!(user_id = id, actor_id = actor.id, "User password reset");
    Ok(())
}
