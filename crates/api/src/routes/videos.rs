//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create (creator or admin)
/// GET    /live             -> list_live
/// GET    /recorded         -> list_recorded
/// GET    /search?q=        -> search
/// GET    /tags             -> tags
/// GET    /user/{user_id}   -> list_by_user
/// GET    /{id}             -> get
/// PUT    /{id}             -> update (owner or admin)
/// DELETE /{id}             -> delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list).post(videos::create))
        .route("/live", get(videos::list_live))
        .route("/recorded", get(videos::list_recorded))
        .route("/search", get(videos::search))
        .route("/tags", get(videos::tags))
        .route("/user/{user_id}", get(videos::list_by_user))
        .route(
            "/{id}",
            get(videos::get).put(videos::update).delete(videos::delete),
        )
}
