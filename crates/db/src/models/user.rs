//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use streambox_core::roles::Role;
use streambox_core::types::{DbId, Timestamp};

/// Full user row as returned by the `sp_get_user*` procedures.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: DbId,
    pub status: String,
    pub profile_picture: Option<String>,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: DbId,
    /// Resolved role name (e.g. `"admin"`, `"creator"`).
    pub role: &'static str,
    pub status: String,
    pub profile_picture: Option<String>,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role_id: user.role_id,
            role: Role::name_of(user.role_id),
            status: user.status,
            profile_picture: user.profile_picture,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

/// DTO for `sp_register_user`.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: DbId,
}

/// DTO for `sp_update_user`. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: Option<DbId>,
}

/// DTO for `sp_update_profile`. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            first_name: Some("Alice".into()),
            last_name: None,
            role_id: 2,
            status: "activo".into(),
            profile_picture: None,
            last_login: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn response_never_carries_the_password_hash() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2id"));
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn response_resolves_the_role_name() {
        let response = UserResponse::from(sample_user());
        assert_eq!(response.role, "creator");
        assert_eq!(response.role_id, 2);
    }
}
