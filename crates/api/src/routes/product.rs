use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::services::ProductService;
use crate::state::AppState;

/// Product routes: the standard entity set plus lookups.
///
/// ```text
/// GET /types           list_types
/// GET /search          search (?name=&type=)
/// ```
pub fn router() -> Router<AppState> {
    super::crud_routes::<ProductService>()
        .route("/types", get(product::list_types))
        .route("/search", get(product::search))
}
