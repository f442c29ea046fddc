//! Handlers for the `/videos` resource.
//!
//! Browsing is public; publishing requires the creator or admin role and
//! editing requires ownership (or admin).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use streambox_core::status::VideoType;
use streambox_core::types::DbId;
use streambox_db::models::video::VideoResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::middleware::rbac::{RequireAdminOrCreator, RequireAuth};
use crate::response::DataResponse;
use crate::services::videos::{self, NewVideo, VideoChanges};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /videos`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideoRequest {
    /// Defaults to the caller.
    pub user_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(url(message = "must be a valid URL"))]
    pub youtube_link: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub video_type: String,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for `PUT /videos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub youtube_link: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters for `GET /videos/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

/// GET /videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    Ok(Json(DataResponse::ok(videos::list_active(&state.pool).await?)))
}

/// GET /videos/live
pub async fn list_live(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    let videos = videos::list_by_type(&state.pool, VideoType::Live).await?;
    Ok(Json(DataResponse::ok(videos)))
}

/// GET /videos/recorded
pub async fn list_recorded(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    let videos = videos::list_by_type(&state.pool, VideoType::Recorded).await?;
    Ok(Json(DataResponse::ok(videos)))
}

/// GET /videos/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    let query = params.q.unwrap_or_default();
    let videos = videos::search(&state.pool, &query).await?;
    Ok(Json(DataResponse::ok(videos)))
}

/// GET /videos/tags
pub async fn tags(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<String>>>> {
    Ok(Json(DataResponse::ok(videos::tags(&state.pool).await?)))
}

/// GET /videos/{id}
pub async fn get(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<VideoResponse>>> {
    Ok(Json(DataResponse::ok(videos::get_public(&state.pool, id).await?)))
}

/// GET /videos/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    let videos = videos::list_by_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse::ok(videos)))
}

// ---------------------------------------------------------------------------
// Management
// ---------------------------------------------------------------------------

/// POST /videos
pub async fn create(
    State(state): State<AppState>,
    RequireAdminOrCreator(caller): RequireAdminOrCreator,
    ValidatedJson(input): ValidatedJson<CreateVideoRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<VideoResponse>>)> {
    let video = videos::create(
        &state.pool,
        &caller,
        NewVideo {
            user_id: input.user_id,
            title: input.title,
            youtube_link: input.youtube_link,
            description: input.description,
            video_type: input.video_type,
            status: input.status,
            thumbnail: input.thumbnail,
            tags: input.tags,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::ok(video))))
}

/// PUT /videos/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateVideoRequest>,
) -> AppResult<Json<DataResponse<VideoResponse>>> {
    let changes = VideoChanges {
        title: input.title,
        youtube_link: input.youtube_link,
        description: input.description,
        video_type: input.video_type,
        status: input.status,
        thumbnail: input.thumbnail,
        tags: input.tags,
    };
    let video = videos::update(&state.pool, &caller, id, changes).await?;
    Ok(Json(DataResponse::ok(video)))
}

/// DELETE /videos/{id}
///
/// Soft delete: the video is suspended, not removed.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<()>>> {
    videos::delete(&state.pool, &caller, id).await?;
    Ok(Json(DataResponse::empty()))
}
