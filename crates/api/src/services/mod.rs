//! Domain services.
//!
//! Each operation follows the same shape: confirm the target exists, check
//! the caller may act on it, issue one mutating procedure call, then re-fetch
//! and return the current representation. The caller is always passed in
//! explicitly as the resolved [`streambox_db::models::user::User`].

pub mod admin;
pub mod albums;
pub mod auth;
pub mod moderation;
pub mod profile;
pub mod reports;
pub mod users;
pub mod videos;
