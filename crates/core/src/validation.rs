//! Input rules checked by the services before any procedure call.

use crate::error::CoreError;
use crate::roles::{Role, ROLE_ADMIN};
use crate::types::DbId;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum length of a video search query.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

/// Maximum number of tag labels on one video.
pub const MAX_TAGS: usize = 20;

/// Maximum length of a single tag label.
pub const MAX_TAG_LENGTH: usize = 50;

/// Reject blank values for a required text field.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Roles a visitor may pick for themselves. Admin accounts are only granted by an admin.
pub fn validate_registration_role(role_id: DbId) -> Result<Role, CoreError> {
    if role_id == ROLE_ADMIN {
        return Err(CoreError::Validation(
            "Cannot self-register with the admin role".into(),
        ));
    }
    Role::try_from(role_id)
}

/// Trim a search query and enforce its length bounds.
pub fn validate_search_query(query: &str) -> Result<String, CoreError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Search query must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Search query must be at most {MAX_SEARCH_QUERY_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim every label and reject empty, oversized or excessive tag lists.
///
/// Order and duplicates are kept as given.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>, CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "A video can have at most {MAX_TAGS} tags"
        )));
    }
    tags.iter()
        .map(|tag| {
            let label = tag.trim();
            if label.is_empty() {
                Err(CoreError::Validation("Tags must not be empty".into()))
            } else if label.chars().count() > MAX_TAG_LENGTH {
                Err(CoreError::Validation(format!(
                    "Tag '{label}' exceeds {MAX_TAG_LENGTH} characters"
                )))
            } else {
                Ok(label.to_string())
            }
        })
        .collect()
}
