use axum::routing::put;
use axum::Router;

use crate::handlers::logistics;
use crate::services::LogisticsService;
use crate::state::AppState;

/// Shipment routes: the standard entity set plus receipt confirmation.
///
/// ```text
/// PUT /confirm/{id}    confirm_receipt
/// ```
pub fn router() -> Router<AppState> {
    super::crud_routes::<LogisticsService>()
        .route("/confirm/{id}", put(logistics::confirm_receipt))
}
