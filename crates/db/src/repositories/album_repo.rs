//! Repository for albums and album membership.

use sqlx::PgPool;
use streambox_core::types::DbId;

use crate::gateway::Procedure;
use crate::models::album::{Album, CreateAlbum, UpdateAlbum};
use crate::models::video::Video;

const LIST_BY_USER: Procedure = Procedure::new("sp_get_album_by_user_id", 1);
const GET_BY_ID: Procedure = Procedure::new("sp_get_album_by_id", 1);
const CREATE: Procedure = Procedure::new("sp_create_album", 4);
const UPDATE: Procedure = Procedure::new("sp_update_album", 4);
const DELETE: Procedure = Procedure::new("sp_delete_album", 1);
const ADD_VIDEO: Procedure = Procedure::new("sp_aggregate_video_to_album", 2);
const REMOVE_VIDEO: Procedure = Procedure::new("sp_remove_video_from_album", 2);
const LIST_VIDEOS: Procedure = Procedure::new("sp_get_videos_by_album_id", 1);

/// Provides the album procedure calls.
pub struct AlbumRepo;

impl AlbumRepo {
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Album>, sqlx::Error> {
        sqlx::query_as::<_, Album>(&LIST_BY_USER.rows_sql())
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a live album by id. Deleted albums are not returned.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        sqlx::query_as::<_, Album>(&GET_BY_ID.rows_sql())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an album, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateAlbum) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(&CREATE.scalar_sql())
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateAlbum) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE.scalar_sql())
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Soft-delete an album. Its membership rows are kept.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&DELETE.scalar_sql())
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Add a video to an album. Adding it twice is a no-op that returns `false`.
    pub async fn add_video(pool: &PgPool, album_id: DbId, video_id: DbId) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&ADD_VIDEO.scalar_sql())
            .bind(video_id)
            .bind(album_id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Remove a video from an album. Returns `false` if it was not a member.
    pub async fn remove_video(
        pool: &PgPool,
        album_id: DbId,
        video_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&REMOVE_VIDEO.scalar_sql())
            .bind(video_id)
            .bind(album_id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Videos in an album, in the order they were added.
    pub async fn list_videos(pool: &PgPool, album_id: DbId) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&LIST_VIDEOS.rows_sql())
            .bind(album_id)
            .fetch_all(pool)
            .await
    }
}
