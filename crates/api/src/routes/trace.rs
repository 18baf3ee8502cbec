use axum::routing::get;
use axum::Router;

use crate::handlers::trace;
use crate::state::AppState;

/// Traceability lookups.
///
/// ```text
/// GET /{kind}/{id}     resolve (kind: productinfo | product | logistics | saleinfo)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{kind}/{id}", get(trace::resolve))
}
