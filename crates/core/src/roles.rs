//! Role ids and the fixed role policies used to gate routes.
//!
//! Role ids must match the seed rows of the `roles` table in
//! `crates/db/migrations/20250301000001_create_tables.sql`.

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_CONSUMER: DbId = 1;
pub const ROLE_CREATOR: DbId = 2;
pub const ROLE_ADMIN: DbId = 3;

/// Account tier stored as `users.role_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Consumer,
    Creator,
    Admin,
}

impl Role {
    /// Return the database role id.
    pub fn id(self) -> DbId {
        match self {
            Self::Consumer => ROLE_CONSUMER,
            Self::Creator => ROLE_CREATOR,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Map a database role id back to a role, `None` for unknown ids.
    pub fn from_id(id: DbId) -> Option<Self> {
        match id {
            ROLE_CONSUMER => Some(Self::Consumer),
            ROLE_CREATOR => Some(Self::Creator),
            ROLE_ADMIN => Some(Self::Admin),
            _ => None,
        }
    }

    /// Lowercase role name used in responses and log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Creator => "creator",
            Self::Admin => "admin",
        }
    }

    /// Resolve a role id to its name, returning `"unknown"` for ids outside the catalog.
    pub fn name_of(id: DbId) -> &'static str {
        Self::from_id(id).map(Self::name).unwrap_or("unknown")
    }
}

impl TryFrom<DbId> for Role {
    type Error = CoreError;

    fn try_from(id: DbId) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown role id: {id}. Valid ids: 1 (consumer), 2 (creator), 3 (admin)"
            ))
        })
    }
}

/// An allow-list of roles checked against an already authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct RolePolicy {
    allowed: &'static [Role],
    denial: &'static str,
}

impl RolePolicy {
    pub const fn new(allowed: &'static [Role], denial: &'static str) -> Self {
        Self { allowed, denial }
    }

    /// Whether the given role id is on the allow-list.
    pub fn allows(&self, role_id: DbId) -> bool {
        Role::from_id(role_id).is_some_and(|role| self.allowed.contains(&role))
    }

    /// Fail with [`CoreError::Forbidden`] when the role id is not allowed.
    pub fn check(&self, role_id: DbId) -> Result<(), CoreError> {
        if self.allows(role_id) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(self.denial.to_string()))
        }
    }
}

pub const ADMIN_ONLY: RolePolicy = RolePolicy::new(&[Role::Admin], "Admin role required");

pub const CREATOR_ONLY: RolePolicy = RolePolicy::new(&[Role::Creator], "Creator role required");

pub const ADMIN_OR_CREATOR: RolePolicy = RolePolicy::new(
    &[Role::Creator, Role::Admin],
    "Creator or Admin role required",
);

pub const ANY_ROLE: RolePolicy = RolePolicy::new(
    &[Role::Consumer, Role::Creator, Role::Admin],
    "You do not have permission to access this resource",
);

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn role_ids_round_trip() {
        for role in [Role::Consumer, Role::Creator, Role::Admin] {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(4), None);
    }

    #[test]
    fn unknown_role_id_is_a_validation_error() {
        assert_matches!(Role::try_from(9), Err(CoreError::Validation(_)));
        assert_eq!(Role::name_of(9), "unknown");
        assert_eq!(Role::name_of(ROLE_ADMIN), "admin");
    }

    #[test]
    fn admin_only_rejects_everyone_else() {
        assert!(ADMIN_ONLY.allows(ROLE_ADMIN));
        assert!(!ADMIN_ONLY.allows(ROLE_CREATOR));
        assert!(!ADMIN_ONLY.allows(ROLE_CONSUMER));
        assert_matches!(
            ADMIN_ONLY.check(ROLE_CONSUMER),
            Err(CoreError::Forbidden(msg)) if msg == "Admin role required"
        );
    }

    #[test]
    fn creator_only_excludes_admins() {
        assert!(CREATOR_ONLY.allows(ROLE_CREATOR));
        assert!(!CREATOR_ONLY.allows(ROLE_ADMIN));
        assert!(!CREATOR_ONLY.allows(ROLE_CONSUMER));
    }

    #[test]
    fn admin_or_creator_excludes_consumers() {
        assert!(ADMIN_OR_CREATOR.check(ROLE_CREATOR).is_ok());
        assert!(ADMIN_OR_CREATOR.check(ROLE_ADMIN).is_ok());
        assert!(ADMIN_OR_CREATOR.check(ROLE_CONSUMER).is_err());
    }

    #[test]
    fn any_role_still_rejects_unknown_ids() {
        for id in [ROLE_CONSUMER, ROLE_CREATOR, ROLE_ADMIN] {
            assert!(ANY_ROLE.allows(id));
        }
        assert_matches!(ANY_ROLE.check(42), Err(CoreError::Forbidden(_)));
    }
}
