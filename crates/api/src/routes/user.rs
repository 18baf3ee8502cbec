use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Account routes.
///
/// ```text
/// POST /register       register
/// POST /login          login
/// POST /logout         logout          (auth)
/// GET  /userInfo       user_info       (auth)
/// PUT  /update         update_profile  (auth)
/// PUT  /editPassword   edit_password   (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .route("/logout", post(user::logout))
        .route("/userInfo", get(user::user_info))
        .route("/update", put(user::update_profile))
        .route("/editPassword", put(user::edit_password))
}
