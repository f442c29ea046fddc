//! Album entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use streambox_core::types::{DbId, Timestamp};

/// An album row from the `sp_get_album*` procedures.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for `sp_create_album`.
#[derive(Debug, Clone)]
pub struct CreateAlbum {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// DTO for `sp_update_album`, already merged with the current row.
#[derive(Debug, Clone)]
pub struct UpdateAlbum {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}
