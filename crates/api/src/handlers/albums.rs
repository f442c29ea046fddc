//! Handlers for the `/my/albums` resource. Creator role only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use streambox_core::types::DbId;
use streambox_db::models::album::Album;
use streambox_db::models::video::VideoResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::middleware::rbac::RequireCreator;
use crate::response::DataResponse;
use crate::services::albums::{self, AlbumChanges, NewAlbum};
use crate::state::AppState;

/// Request body for `POST /my/albums`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAlbumRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// Request body for `PUT /my/albums/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAlbumRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// GET /my/albums
pub async fn list(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
) -> AppResult<Json<DataResponse<Vec<Album>>>> {
    Ok(Json(DataResponse::ok(albums::list_mine(&state.pool, &caller).await?)))
}

/// POST /my/albums
pub async fn create(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedJson(input): ValidatedJson<CreateAlbumRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Album>>)> {
    let album = albums::create(
        &state.pool,
        &caller,
        NewAlbum {
            title: input.title,
            description: input.description,
            thumbnail: input.thumbnail,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::ok(album))))
}

/// PUT /my/albums/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAlbumRequest>,
) -> AppResult<Json<DataResponse<Album>>> {
    let changes = AlbumChanges {
        title: input.title,
        description: input.description,
        thumbnail: input.thumbnail,
    };
    let album = albums::update(&state.pool, &caller, id, changes).await?;
    Ok(Json(DataResponse::ok(album)))
}

/// DELETE /my/albums/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<()>>> {
    albums::delete(&state.pool, &caller, id).await?;
    Ok(Json(DataResponse::empty()))
}

/// GET /my/albums/{id}/videos
pub async fn list_videos(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<VideoResponse>>>> {
    let videos = albums::list_videos(&state.pool, &caller, id).await?;
    Ok(Json(DataResponse::ok(videos)))
}

/// POST /my/albums/{id}/videos/{video_id}
pub async fn add_video(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedPath((id, video_id)): ValidatedPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<()>>> {
    albums::add_video(&state.pool, &caller, id, video_id).await?;
    Ok(Json(DataResponse::empty()))
}

/// DELETE /my/albums/{id}/videos/{video_id}
pub async fn remove_video(
    State(state): State<AppState>,
    RequireCreator(caller): RequireCreator,
    ValidatedPath((id, video_id)): ValidatedPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<()>>> {
    albums::remove_video(&state.pool, &caller, id, video_id).await?;
    Ok(Json(DataResponse::empty()))
}
