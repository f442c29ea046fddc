//! Repository for user accounts.

use sqlx::PgPool;
use streambox_core::types::{DbId, Timestamp};

use crate::gateway::Procedure;
use crate::models::user::{CreateUser, UpdateProfile, UpdateUser, User};

const REGISTER: Procedure = Procedure::new("sp_register_user", 6);
const GET_BY_ID: Procedure = Procedure::new("sp_get_user_details_by_id", 1);
const GET_BY_USERNAME: Procedure = Procedure::new("sp_get_user_details_by_username", 1);
const GET_BY_EMAIL: Procedure = Procedure::new("sp_get_user_details_by_email", 1);
const LIST: Procedure = Procedure::new("sp_get_users", 0);
const UPDATE_LAST_LOGIN: Procedure = Procedure::new("sp_update_last_login", 2);
const UPDATE: Procedure = Procedure::new("sp_update_user", 6);
const UPDATE_PROFILE: Procedure = Procedure::new("sp_update_profile", 5);
const UPDATE_PASSWORD_HASH: Procedure = Procedure::new("sp_update_password_hash", 2);
const UPDATE_PROFILE_PICTURE: Procedure = Procedure::new("sp_update_profile_picture", 2);
const CHANGE_ROLE: Procedure = Procedure::new("sp_change_role", 2);
const CHANGE_STATUS: Procedure = Procedure::new("sp_change_status", 2);

/// Message `sp_update_profile` returns when the update was applied.
pub const PROFILE_UPDATE_OK: &str = "SUCCESS";

/// Provides the user procedure calls.
pub struct UserRepo;

impl UserRepo {
    /// Register a new account, returning its id.
    pub async fn register(pool: &PgPool, input: &CreateUser) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(&REGISTER.scalar_sql())
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&GET_BY_ID.rows_sql())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&GET_BY_USERNAME.rows_sql())
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&GET_BY_EMAIL.rows_sql())
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List every account regardless of status.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&LIST.rows_sql())
            .fetch_all(pool)
            .await
    }

    pub async fn record_login(pool: &PgPool, id: DbId, at: Timestamp) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE_LAST_LOGIN.scalar_sql())
            .bind(id)
            .bind(at)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Update account fields, keeping stored values for `None`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE.scalar_sql())
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.role_id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Update the caller-editable profile fields.
    ///
    /// Returns the procedure's message: [`PROFILE_UPDATE_OK`] on success,
    /// otherwise a human-readable reason (e.g. the username is taken).
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>(&UPDATE_PROFILE.scalar_sql())
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    pub async fn update_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE_PASSWORD_HASH.scalar_sql())
            .bind(id)
            .bind(password_hash)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    pub async fn update_profile_picture(
        pool: &PgPool,
        id: DbId,
        profile_picture: &str,
    ) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE_PROFILE_PICTURE.scalar_sql())
            .bind(id)
            .bind(profile_picture)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    pub async fn change_role(pool: &PgPool, id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&CHANGE_ROLE.scalar_sql())
            .bind(id)
            .bind(role_id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Set the account status. Deleting an account is a status change to `suspendido`.
    pub async fn change_status(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&CHANGE_STATUS.scalar_sql())
            .bind(id)
            .bind(status)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }
}
