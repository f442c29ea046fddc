//! Registration, credential checks and bearer-token resolution.

use chrono::Utc;
use streambox_core::error::CoreError;
use streambox_core::types::DbId;
use streambox_core::validation::{validate_password, validate_registration_role, validate_required};
use streambox_db::models::user::{CreateUser, User};
use streambox_db::repositories::UserRepo;
use streambox_db::DbPool;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// Input for [`register`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: DbId,
}

/// Create an account and return it as stored.
///
/// Input rules are checked before any database call. A procedure failure
/// (duplicate username or email) is reported as a 400 with the database message.
pub async fn register(pool: &DbPool, input: Registration) -> AppResult<User> {
    validate_required("username", &input.username)?;
    validate_password(&input.password)?;
    let role = validate_registration_role(input.role_id)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_string(),
        password_hash,
        first_name: input.first_name,
        last_name: input.last_name,
        role_id: role.id(),
    };

    let user_id = UserRepo::register(pool, &create)
        .await
        .map_err(|e| AppError::BadRequest(format!("Error registering user: {e}")))?;

    let user = UserRepo::find_by_email(pool, &create.email)
        .await?
        .ok_or_else(|| AppError::InternalError("Registered user could not be loaded".into()))?;

    tracing::info!(user_id, username = %user.username, role = role.name(), "User registered");
    Ok(user)
}

/// Check a username/password pair and record the login time.
///
/// Account status is not consulted: suspended accounts can still log in.
pub async fn authenticate(pool: &DbPool, username: &str, password: &str) -> AppResult<User> {
    let user = UserRepo::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let matches = verify_password(password, &user.password_hash).unwrap_or_else(|e| {
        tracing::warn!(user_id = user.id, error = %e, "Stored password hash could not be parsed");
        false
    });
    if !matches {
        tracing::info!(user_id = user.id, "Login rejected: password mismatch");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    UserRepo::record_login(pool, user.id, Utc::now()).await?;
    tracing::info!(user_id = user.id, "User logged in");
    Ok(user)
}

/// Resolve a bearer token to the current user row.
///
/// Any verification error, a missing user, or a failed lookup is a 401.
pub async fn resolve_token(pool: &DbPool, jwt: &JwtConfig, token: &str) -> AppResult<User> {
    let claims = validate_token(token, jwt)
        .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    match UserRepo::find_by_id(pool, claims.sub).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(AppError::unauthorized("User no longer exists")),
        Err(e) => {
            tracing::warn!(user_id = claims.sub, error = %e, "User lookup failed during token resolution");
            Err(AppError::Core(CoreError::Unauthorized(
                "Could not validate credentials".into(),
            )))
        }
    }
}
