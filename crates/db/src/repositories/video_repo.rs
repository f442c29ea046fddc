//! Repository for videos, including the moderation procedures.

use sqlx::PgPool;
use streambox_core::types::DbId;

use crate::gateway::Procedure;
use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoTag};

const LIST_ACTIVE: Procedure = Procedure::new("sp_get_videos", 0);
const GET_BY_ID: Procedure = Procedure::new("sp_get_video_by_id", 1);
const GET_ANY: Procedure = Procedure::new("sp_get_video", 1);
const LIST_BY_TYPE: Procedure = Procedure::new("sp_get_videos_by_type", 1);
const SEARCH: Procedure = Procedure::new("sp_search_videos", 1);
const LIST_TAGS: Procedure = Procedure::new("sp_get_video_tags", 0);
const LIST_BY_USER: Procedure = Procedure::new("sp_get_video_by_user_id", 1);
const CREATE: Procedure = Procedure::new("sp_create_video", 8);
const UPDATE: Procedure = Procedure::new("sp_update_video", 8);
const DELETE: Procedure = Procedure::new("sp_delete_video", 1);
const LIST_FOR_MODERATION: Procedure = Procedure::new("sp_get_all_videos_for_moderation", 0);
const DELETE_BY_ADMIN: Procedure = Procedure::new("sp_delete_video_by_admin", 2);

/// Provides the video procedure calls.
pub struct VideoRepo;

impl VideoRepo {
    /// List videos with status `activo`, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&LIST_ACTIVE.rows_sql())
            .fetch_all(pool)
            .await
    }

    /// Find a video by id regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&GET_BY_ID.rows_sql())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Existence check used before filing reports and moderation removals.
    pub async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&GET_ANY.rows_sql())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active videos of one type (`live` or `recorded`).
    pub async fn list_by_type(pool: &PgPool, video_type: &str) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&LIST_BY_TYPE.rows_sql())
            .bind(video_type)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive match on title, description and tags of active videos.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&SEARCH.rows_sql())
            .bind(query)
            .fetch_all(pool)
            .await
    }

    /// Distinct tag labels used by active videos, sorted.
    pub async fn list_tags(pool: &PgPool) -> Result<Vec<VideoTag>, sqlx::Error> {
        sqlx::query_as::<_, VideoTag>(&LIST_TAGS.rows_sql())
            .fetch_all(pool)
            .await
    }

    /// List active videos owned by a user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&LIST_BY_USER.rows_sql())
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a video, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(&CREATE.scalar_sql())
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.youtube_link)
            .bind(&input.description)
            .bind(&input.video_type)
            .bind(&input.status)
            .bind(&input.thumbnail)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every editable column. Returns `true` if the row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateVideo) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&UPDATE.scalar_sql())
            .bind(id)
            .bind(&input.title)
            .bind(&input.youtube_link)
            .bind(&input.description)
            .bind(&input.video_type)
            .bind(&input.status)
            .bind(&input.tags)
            .bind(&input.thumbnail)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Soft-delete: the row stays and its status becomes `suspendido`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&DELETE.scalar_sql())
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }

    /// Every video in every status, for moderators.
    pub async fn list_for_moderation(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(&LIST_FOR_MODERATION.rows_sql())
            .fetch_all(pool)
            .await
    }

    /// Mark a video with a moderation status (e.g. `eliminado_por_incumplimiento`).
    pub async fn delete_by_admin(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&DELETE_BY_ADMIN.scalar_sql())
            .bind(id)
            .bind(status)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }
}
