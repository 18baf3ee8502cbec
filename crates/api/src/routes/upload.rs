use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// ```text
/// POST /upload         upload_image (multipart field `file`)
/// ```
///
/// The route replaces axum's 2 MiB default body limit with `max_bytes`.
/// Stored files are served by the `/images` static service mounted in
/// [`build_app_router`](crate::router::build_app_router).
pub fn router(max_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload::upload_image).layer(DefaultBodyLimit::max(max_bytes)),
    )
}
