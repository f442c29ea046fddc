use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// POST /      -> create
/// GET  /my    -> list_mine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(reports::create))
        .route("/my", get(reports::list_mine))
}
