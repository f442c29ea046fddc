//! Creator albums. Every operation is restricted to the album's owner.

use streambox_core::access::ensure_owner;
use streambox_core::error::CoreError;
use streambox_core::types::DbId;
use streambox_core::validation::validate_required;
use streambox_db::models::album::{Album, CreateAlbum, UpdateAlbum};
use streambox_db::models::user::User;
use streambox_db::models::video::VideoResponse;
use streambox_db::repositories::{AlbumRepo, VideoRepo};
use streambox_db::DbPool;

use crate::error::AppResult;

/// Input for [`create`].
#[derive(Debug, Clone)]
pub struct NewAlbum {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// Partial update for [`update`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct AlbumChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

async fn load(pool: &DbPool, id: DbId) -> AppResult<Album> {
    AlbumRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Album", id }.into())
}

/// Load an album the caller owns.
async fn load_owned(pool: &DbPool, caller: &User, id: DbId, action: &str) -> AppResult<Album> {
    let album = load(pool, id).await?;
    ensure_owner(album.user_id, caller.id, action)?;
    Ok(album)
}

pub async fn list_mine(pool: &DbPool, caller: &User) -> AppResult<Vec<Album>> {
    Ok(AlbumRepo::list_by_user(pool, caller.id).await?)
}

pub async fn create(pool: &DbPool, caller: &User, input: NewAlbum) -> AppResult<Album> {
    validate_required("title", &input.title)?;

    let create = CreateAlbum {
        user_id: caller.id,
        title: input.title.trim().to_string(),
        description: input.description,
        thumbnail: input.thumbnail,
    };
    let album_id = AlbumRepo::create(pool, &create).await?;
    tracing::info!(user_id = caller.id, album_id, "Album created");

    let album = AlbumRepo::find_by_id(pool, album_id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Created album {album_id} could not be loaded")))?;
    Ok(album)
}

pub async fn update(pool: &DbPool, caller: &User, id: DbId, changes: AlbumChanges) -> AppResult<Album> {
    let current = load_owned(pool, caller, id, "edit this album").await?;
    if let Some(title) = &changes.title {
        validate_required("title", title)?;
    }

    let update = UpdateAlbum {
        title: changes.title.map_or(current.title, |t| t.trim().to_string()),
        description: changes.description.or(current.description),
        thumbnail: changes.thumbnail.or(current.thumbnail),
    };
    AlbumRepo::update(pool, id, &update).await?;
    tracing::info!(user_id = caller.id, album_id = id, "Album updated");

    load(pool, id).await
}

pub async fn delete(pool: &DbPool, caller: &User, id: DbId) -> AppResult<()> {
    load_owned(pool, caller, id, "delete this album").await?;
    AlbumRepo::soft_delete(pool, id).await?;
    tracing::info!(user_id = caller.id, album_id = id, "Album deleted");
    Ok(())
}

/// Add a video to one of the caller's albums. Adding a member again is a no-op.
pub async fn add_video(pool: &DbPool, caller: &User, album_id: DbId, video_id: DbId) -> AppResult<()> {
    load_owned(pool, caller, album_id, "modify this album").await?;
    VideoRepo::find_any(pool, video_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Video", id: video_id })?;

    let added = AlbumRepo::add_video(pool, album_id, video_id).await?;
    tracing::info!(user_id = caller.id, album_id, video_id, added, "Video added to album");
    Ok(())
}

/// Remove a video from one of the caller's albums. Removing a non-member is a no-op.
pub async fn remove_video(
    pool: &DbPool,
    caller: &User,
    album_id: DbId,
    video_id: DbId,
) -> AppResult<()> {
    load_owned(pool, caller, album_id, "modify this album").await?;
    let removed = AlbumRepo::remove_video(pool, album_id, video_id).await?;
    tracing::info!(user_id = caller.id, album_id, video_id, removed, "Video removed from album");
    Ok(())
}

pub async fn list_videos(pool: &DbPool, caller: &User, album_id: DbId) -> AppResult<Vec<VideoResponse>> {
    load_owned(pool, caller, album_id, "view this album").await?;
    let videos = AlbumRepo::list_videos(pool, album_id).await?;
    Ok(videos.into_iter().map(VideoResponse::from).collect())
}
