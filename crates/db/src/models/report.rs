//! Abuse report model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use streambox_core::types::{DbId, Timestamp};

/// A report row joined with the reported video's title and the reporter's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub user_id: DbId,
    pub video_id: DbId,
    pub reason: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub video_title: Option<String>,
    pub reporter_username: Option<String>,
}

/// DTO for `sp_create_report`.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub video_id: DbId,
    pub user_id: DbId,
    pub reason: String,
    pub description: Option<String>,
}
