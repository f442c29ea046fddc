use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /         -> list
/// GET /me       -> me
/// GET /{id}     -> get
/// PUT /{id}     -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list))
        .route("/me", get(users::me))
        .route("/{id}", get(users::get).put(users::update))
}
