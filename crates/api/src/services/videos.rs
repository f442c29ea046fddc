//! Public browsing and owner-managed video operations.

use streambox_core::access::{ensure_owner_or_admin, ensure_video_status_change};
use streambox_core::error::CoreError;
use streambox_core::roles::ROLE_ADMIN;
use streambox_core::status::{VideoStatus, VideoType};
use streambox_core::tags::encode_tags;
use streambox_core::types::DbId;
use streambox_core::validation::{normalize_tags, validate_required, validate_search_query};
use streambox_db::models::user::User;
use streambox_db::models::video::{CreateVideo, UpdateVideo, Video, VideoResponse};
use streambox_db::repositories::VideoRepo;
use streambox_db::DbPool;

use crate::error::AppResult;

/// Input for [`create`].
#[derive(Debug, Clone)]
pub struct NewVideo {
    /// Owner to publish for. Defaults to the caller; only admins may name someone else.
    pub user_id: Option<DbId>,
    pub title: String,
    pub youtube_link: String,
    pub description: Option<String>,
    pub video_type: String,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update for [`update`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct VideoChanges {
    pub title: Option<String>,
    pub youtube_link: Option<String>,
    pub description: Option<String>,
    pub video_type: Option<String>,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn respond(videos: Vec<Video>) -> Vec<VideoResponse> {
    videos.into_iter().map(VideoResponse::from).collect()
}

/// Load a video in any status or fail with `NotFound`.
async fn load(pool: &DbPool, id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Video", id }.into())
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

pub async fn list_active(pool: &DbPool) -> AppResult<Vec<VideoResponse>> {
    Ok(respond(VideoRepo::list_active(pool).await?))
}

/// A single video as visitors see it: anything not `activo` is reported as missing.
pub async fn get_public(pool: &DbPool, id: DbId) -> AppResult<VideoResponse> {
    let video = load(pool, id).await?;
    if video.status != VideoStatus::Active.as_str() {
        return Err(CoreError::NotFound { entity: "Video", id }.into());
    }
    Ok(video.into())
}

pub async fn list_by_type(pool: &DbPool, video_type: VideoType) -> AppResult<Vec<VideoResponse>> {
    Ok(respond(VideoRepo::list_by_type(pool, video_type.as_str()).await?))
}

pub async fn search(pool: &DbPool, query: &str) -> AppResult<Vec<VideoResponse>> {
    let query = validate_search_query(query)?;
    Ok(respond(VideoRepo::search(pool, &query).await?))
}

/// Distinct labels across active videos.
pub async fn tags(pool: &DbPool) -> AppResult<Vec<String>> {
    let rows = VideoRepo::list_tags(pool).await?;
    Ok(rows.into_iter().map(|row| row.tag).collect())
}

pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> AppResult<Vec<VideoResponse>> {
    Ok(respond(VideoRepo::list_by_user(pool, user_id).await?))
}

// ---------------------------------------------------------------------------
// Management
// ---------------------------------------------------------------------------

/// Publish a video and return it as stored.
pub async fn create(pool: &DbPool, caller: &User, input: NewVideo) -> AppResult<VideoResponse> {
    let owner_id = input.user_id.unwrap_or(caller.id);
    if owner_id != caller.id && caller.role_id != ROLE_ADMIN {
        return Err(CoreError::Forbidden(
            "You can only publish videos for your own account".into(),
        )
        .into());
    }

    validate_required("title", &input.title)?;
    validate_required("youtube_link", &input.youtube_link)?;
    let video_type: VideoType = input.video_type.parse()?;
    let status: VideoStatus = match input.status.as_deref() {
        Some(raw) => raw.parse()?,
        None => VideoStatus::Active,
    };
    ensure_video_status_change(VideoStatus::Active.as_str(), status, caller.role_id)?;
    let tags = normalize_tags(&input.tags)?;

    let create = CreateVideo {
        user_id: owner_id,
        title: input.title.trim().to_string(),
        youtube_link: input.youtube_link.trim().to_string(),
        description: input.description,
        video_type: video_type.as_str().to_string(),
        status: status.as_str().to_string(),
        thumbnail: input.thumbnail,
        tags: encode_tags(&tags),
    };
    let video_id = VideoRepo::create(pool, &create).await?;
    tracing::info!(user_id = owner_id, video_id, actor_id = caller.id, "Video created");

    let video = VideoRepo::find_by_id(pool, video_id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Created video {video_id} could not be loaded")))?;
    Ok(video.into())
}

/// Apply a partial update. Only the owner or an admin may edit.
pub async fn update(
    pool: &DbPool,
    caller: &User,
    id: DbId,
    changes: VideoChanges,
) -> AppResult<VideoResponse> {
    let current = load(pool, id).await?;
    ensure_owner_or_admin(current.user_id, caller.id, caller.role_id, "edit this video")?;

    let video_type = match changes.video_type.as_deref() {
        Some(raw) => raw.parse::<VideoType>()?.as_str().to_string(),
        None => current.video_type.clone(),
    };
    let status = match changes.status.as_deref() {
        Some(raw) => raw.parse::<VideoStatus>()?,
        None => current.status.parse::<VideoStatus>()?,
    };
    ensure_video_status_change(&current.status, status, caller.role_id)?;

    let tags = match changes.tags {
        Some(tags) => encode_tags(&normalize_tags(&tags)?),
        None => current.tags.clone().unwrap_or_else(|| "[]".into()),
    };
    if let Some(title) = &changes.title {
        validate_required("title", title)?;
    }
    if let Some(link) = &changes.youtube_link {
        validate_required("youtube_link", link)?;
    }

    let update = UpdateVideo {
        title: changes.title.map_or(current.title, |t| t.trim().to_string()),
        youtube_link: changes
            .youtube_link
            .map_or(current.youtube_link, |l| l.trim().to_string()),
        description: changes.description.or(current.description),
        video_type,
        status: status.as_str().to_string(),
        thumbnail: changes.thumbnail.or(current.thumbnail),
        tags,
    };
    VideoRepo::update(pool, id, &update).await?;
    tracing::info!(video_id = id, actor_id = caller.id, "Video updated");

    Ok(load(pool, id).await?.into())
}

/// Soft-delete a video. The row is kept with status `suspendido`.
pub async fn delete(pool: &DbPool, caller: &User, id: DbId) -> AppResult<()> {
    let current = load(pool, id).await?;
    ensure_owner_or_admin(current.user_id, caller.id, caller.role_id, "delete this video")?;
    ensure_video_status_change(&current.status, VideoStatus::Suspended, caller.role_id)?;

    VideoRepo::soft_delete(pool, id).await?;
    tracing::info!(video_id = id, actor_id = caller.id, "Video deleted");
    Ok(())
}
