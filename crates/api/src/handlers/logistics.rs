use agritrace_core::types::DbId;
use agritrace_db::models::logistics::LogisticsDetail;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::ApiResponse;
use crate::services::LogisticsService;

/// PUT /logistics/confirm/{id}
///
/// Stamp the shipment's end time and return the updated record.
pub async fn confirm_receipt(
    State(service): State<LogisticsService>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<LogisticsDetail>>> {
    let record = service.confirm_receipt(id).await?;
    Ok(Json(ApiResponse::with_message(record, "Receipt confirmed")))
}
