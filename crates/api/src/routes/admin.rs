//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /users                  -> list_users
/// DELETE /users/{id}             -> delete_user
/// PUT    /users/{id}/role        -> change_role
/// PUT    /users/{id}/status      -> change_status
/// PUT    /users/{id}/reset       -> reset_password
/// GET    /videos                 -> list_videos
/// DELETE /videos/{id}            -> remove_video
/// GET    /reports                -> list_reports
/// PUT    /reports/{id}/resolve   -> resolve_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/users/{id}/role", put(admin::change_role))
        .route("/users/{id}/status", put(admin::change_status))
        .route("/users/{id}/reset", put(admin::reset_password))
        .route("/videos", get(admin::list_videos))
        .route("/videos/{id}", delete(admin::remove_video))
        .route("/reports", get(admin::list_reports))
        .route("/reports/{id}/resolve", put(admin::resolve_report))
}
