//! Handlers shared by every entity route group.
//!
//! Each handler is generic over the entity's [`CrudService`]; the service
//! is built from the application state through `FromRef`.

use agritrace_core::pagination::{PageQuery, PageResult};
use agritrace_core::types::DbId;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::services::CrudService;

/// POST /{entity}
pub async fn create<S: CrudService>(
    State(service): State<S>,
    AppJson(input): AppJson<S::Create>,
) -> AppResult<Json<ApiResponse<DbId>>> {
    let id = service.create(&input).await?;
    Ok(Json(ApiResponse::with_message(id, "Created")))
}

/// PUT /{entity}
pub async fn update<S: CrudService>(
    State(service): State<S>,
    AppJson(input): AppJson<S::Update>,
) -> AppResult<Json<ApiResponse<()>>> {
    service.update(&input).await?;
    Ok(Json(ApiResponse::message("Updated")))
}

/// DELETE /{entity}/{id}
pub async fn delete<S: CrudService>(
    State(service): State<S>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::message("Deleted")))
}

/// GET /{entity}/{id}
pub async fn get_by_id<S>(
    State(service): State<S>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<S::Record>>>
where
    S: CrudService,
    S::Record: Serialize,
{
    let record = service.get(id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// GET /{entity}/list
pub async fn list<S>(State(service): State<S>) -> AppResult<Json<ApiResponse<Vec<S::Record>>>>
where
    S: CrudService,
    S::Record: Serialize,
{
    let records = service.list(&Default::default()).await?;
    Ok(Json(ApiResponse::ok(records)))
}

/// POST /{entity}/page
pub async fn page<S>(
    State(service): State<S>,
    AppJson(query): AppJson<PageQuery<S::Filter>>,
) -> AppResult<Json<ApiResponse<PageResult<S::Record>>>>
where
    S: CrudService,
    S::Record: Serialize,
{
    let page = service.page(&query).await?;
    Ok(Json(ApiResponse::ok(page)))
}
