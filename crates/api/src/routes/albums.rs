use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::albums;
use crate::state::AppState;

/// Routes mounted at `/my/albums`. Creator role only.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/videos               -> list_videos
/// POST   /{id}/videos/{video_id}    -> add_video
/// DELETE /{id}/videos/{video_id}    -> remove_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(albums::list).post(albums::create))
        .route("/{id}", put(albums::update).delete(albums::delete))
        .route("/{id}/videos", get(albums::list_videos))
        .route(
            "/{id}/videos/{video_id}",
            post(albums::add_video).delete(albums::remove_video),
        )
}
