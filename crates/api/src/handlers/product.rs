use agritrace_db::models::product::{Product, ProductFilter};
use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::services::{CrudService, ProductService};

/// GET /product/types
pub async fn list_types(
    State(service): State<ProductService>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let types = service.types().await?;
    Ok(Json(ApiResponse::ok(types)))
}

/// GET /product/search?name=&type=
///
/// Unpaginated product search by name substring and exact type.
pub async fn search(
    State(service): State<ProductService>,
    Query(filter): Query<ProductFilter>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok(products)))
}
