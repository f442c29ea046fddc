//! Abuse reports filed by any authenticated user.

use streambox_core::error::CoreError;
use streambox_core::types::DbId;
use streambox_core::validation::validate_required;
use streambox_db::models::report::{CreateReport, Report};
use streambox_db::models::user::User;
use streambox_db::repositories::{ReportRepo, VideoRepo};
use streambox_db::DbPool;

use crate::error::AppResult;

/// Input for [`file`]. The reporter is always the caller.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub video_id: DbId,
    pub reason: String,
    pub description: Option<String>,
}

/// File a report against an existing video.
pub async fn file(pool: &DbPool, caller: &User, input: NewReport) -> AppResult<Report> {
    validate_required("reason", &input.reason)?;
    VideoRepo::find_any(pool, input.video_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Video",
            id: input.video_id,
        })?;

    let create = CreateReport {
        video_id: input.video_id,
        user_id: caller.id,
        reason: input.reason.trim().to_string(),
        description: input.description,
    };
    let report_id = ReportRepo::create(pool, &create).await?;
    tracing::info!(user_id = caller.id, video_id = input.video_id, report_id, "Report filed");

    let report = ReportRepo::find_by_id(pool, report_id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Created report {report_id} could not be loaded")))?;
    Ok(report)
}

pub async fn list_mine(pool: &DbPool, caller: &User) -> AppResult<Vec<Report>> {
    Ok(ReportRepo::list_by_user(pool, caller.id).await?)
}
