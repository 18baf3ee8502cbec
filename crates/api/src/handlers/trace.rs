use agritrace_core::trace::TraceLink;
use agritrace_core::types::DbId;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::ApiResponse;
use crate::services::{TraceRecord, TraceResolver};

/// GET /traceability/{kind}/{id}
pub async fn resolve(
    State(resolver): State<TraceResolver>,
    AppPath((link, id)): AppPath<(TraceLink, DbId)>,
) -> AppResult<Json<ApiResponse<TraceRecord>>> {
    let record = resolver.resolve(link, id).await?;
    Ok(Json(ApiResponse::ok(record)))
}
