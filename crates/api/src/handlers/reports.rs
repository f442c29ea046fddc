//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use streambox_core::types::DbId;
use streambox_db::models::report::Report;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::services::reports::{self, NewReport};
use crate::state::AppState;

/// Request body for `POST /reports`. The reporter is always the caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    pub video_id: DbId,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub reason: String,
    pub description: Option<String>,
}

/// POST /reports
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    ValidatedJson(input): ValidatedJson<CreateReportRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Report>>)> {
    let report = reports::file(
        &state.pool,
        &caller,
        NewReport {
            video_id: input.video_id,
            reason: input.reason,
            description: input.description,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::ok(report))))
}

/// GET /reports/my
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    Ok(Json(DataResponse::ok(reports::list_mine(&state.pool, &caller).await?)))
}
