//! Account reads and the admin-only general update.

use streambox_core::error::CoreError;
use streambox_core::roles::Role;
use streambox_core::types::DbId;
use streambox_db::models::user::{UpdateUser, User};
use streambox_db::repositories::UserRepo;
use streambox_db::DbPool;

use crate::error::AppResult;

pub async fn list(pool: &DbPool) -> AppResult<Vec<User>> {
    Ok(UserRepo::list(pool).await?)
}

/// Load a user or fail with `NotFound`.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "User", id }.into())
}

/// Update any account's fields. Absent fields keep their stored values.
pub async fn update(pool: &DbPool, actor: &User, id: DbId, input: UpdateUser) -> AppResult<User> {
    get(pool, id).await?;
    if let Some(role_id) = input.role_id {
        Role::try_from(role_id)?;
    }

    UserRepo::update(pool, id, &input).await?;
    tracing::info!(user_id = id, actor_id = actor.id, "User updated");
    get(pool, id).await
}
