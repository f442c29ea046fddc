//! Ownership and target rules applied by the domain services.

use crate::error::CoreError;
use crate::roles::ROLE_ADMIN;
use crate::status::VideoStatus;
use crate::types::DbId;

/// The entity's owner or any admin may act. `action` completes the sentence
/// "You do not have permission to ...".
pub fn ensure_owner_or_admin(
    owner_id: DbId,
    actor_id: DbId,
    actor_role_id: DbId,
    action: &str,
) -> Result<(), CoreError> {
    if owner_id == actor_id || actor_role_id == ROLE_ADMIN {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You do not have permission to {action}"
        )))
    }
}

/// Only the entity's owner may act, admins included.
pub fn ensure_owner(owner_id: DbId, actor_id: DbId, action: &str) -> Result<(), CoreError> {
    if owner_id == actor_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You do not have permission to {action}"
        )))
    }
}

/// Admin accounts cannot be suspended or deleted through the admin endpoints.
pub fn ensure_not_admin_target(target_role_id: DbId, action: &str) -> Result<(), CoreError> {
    if target_role_id == ROLE_ADMIN {
        Err(CoreError::Forbidden(format!("Cannot {action} an administrator")))
    } else {
        Ok(())
    }
}

/// Only moderators may set or lift `eliminado_por_incumplimiento`.
///
/// `current` is the stored status text; `requested` is the status the
/// caller's change would leave the video in.
pub fn ensure_video_status_change(
    current: &str,
    requested: VideoStatus,
    actor_role_id: DbId,
) -> Result<(), CoreError> {
    if actor_role_id == ROLE_ADMIN {
        return Ok(());
    }
    if current == VideoStatus::RemovedForViolation.as_str() {
        return Err(CoreError::Forbidden(
            "Video was removed by a moderator".into(),
        ));
    }
    if requested == VideoStatus::RemovedForViolation {
        return Err(CoreError::Forbidden(
            "Only moderators can remove videos for violations".into(),
        ));
    }
    Ok(())
}
