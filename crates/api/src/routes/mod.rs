pub mod admin;
pub mod albums;
pub mod auth;
pub mod health;
pub mod profile;
pub mod reports;
pub mod users;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree. Everything is mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/token                                      OAuth2 form login (public)
///
/// /users                                           list (auth required)
/// /users/me                                        caller (auth required)
/// /users/{id}                                      get (auth), update (admin)
///
/// /profile                                         get, update (auth required)
/// /profile/password                                change password
/// /profile/picture                                 update picture
///
/// /videos                                          list (public), create (creator/admin)
/// /videos/live                                     live videos (public)
/// /videos/recorded                                 recorded videos (public)
/// /videos/search?q=                                search (public)
/// /videos/tags                                     distinct tags (public)
/// /videos/user/{user_id}                           by owner (public)
/// /videos/{id}                                     get (public), update, delete (owner/admin)
///
/// /my/albums                                       list, create (creator only)
/// /my/albums/{id}                                  update, delete
/// /my/albums/{id}/videos                           list album videos
/// /my/albums/{id}/videos/{video_id}                add, remove
///
/// /reports                                         file (auth required)
/// /reports/my                                      caller's reports
///
/// /admin/users                                     list (admin only)
/// /admin/users/{id}                                delete (suspend)
/// /admin/users/{id}/role                           change role
/// /admin/users/{id}/status                         change status
/// /admin/users/{id}/reset                          reset password
/// /admin/videos                                    moderation list
/// /admin/videos/{id}                               remove for violation
/// /admin/reports                                   all reports
/// /admin/reports/{id}/resolve                      resolve
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/profile", profile::router())
        .nest("/videos", videos::router())
        .nest("/my/albums", albums::router())
        .nest("/reports", reports::router())
        .nest("/admin", admin::router())
}
