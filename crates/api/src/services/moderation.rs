//! Admin moderation of videos and reports.

use streambox_core::error::CoreError;
use streambox_core::status::VideoStatus;
use streambox_core::types::DbId;
use streambox_db::models::report::Report;
use streambox_db::models::user::User;
use streambox_db::models::video::VideoResponse;
use streambox_db::repositories::{ReportRepo, VideoRepo};
use streambox_db::DbPool;

use crate::error::AppResult;

/// Every video regardless of status, including soft-deleted ones.
pub async fn list_videos(pool: &DbPool) -> AppResult<Vec<VideoResponse>> {
    let videos = VideoRepo::list_for_moderation(pool).await?;
    Ok(videos.into_iter().map(VideoResponse::from).collect())
}

/// Mark a video `eliminado_por_incumplimiento`. The row is kept.
pub async fn remove_video(pool: &DbPool, actor: &User, id: DbId) -> AppResult<()> {
    VideoRepo::find_any(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Video", id })?;

    VideoRepo::delete_by_admin(pool, id, VideoStatus::RemovedForViolation.as_str()).await?;
    tracing::info!(video_id = id, actor_id = actor.id, "Video removed for violation");
    Ok(())
}

pub async fn list_reports(pool: &DbPool) -> AppResult<Vec<Report>> {
    Ok(ReportRepo::list_all(pool).await?)
}

/// Mark a report resolved and return its new state.
pub async fn resolve_report(pool: &DbPool, actor: &User, id: DbId) -> AppResult<Report> {
    ReportRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Report", id })?;

    ReportRepo::resolve(pool, id).await?;
    tracing::info!(report_id = id, actor_id = actor.id, "Report resolved");

    let report = ReportRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Report", id })?;
    Ok(report)
}
