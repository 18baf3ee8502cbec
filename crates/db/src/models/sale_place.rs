//! Sale place (market, shop) model and DTOs.

use agritrace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `sale_places` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePlace {
    pub id: DbId,
    pub address: String,
    pub administrator: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePlace {
    #[validate(length(min = 1, message = "Sale place address is required"))]
    pub address: String,
    #[serde(default)]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalePlace {
    #[validate(range(min = 1, message = "Sale place id must be positive"))]
    pub id: DbId,
    #[validate(length(min = 1, message = "Sale place address is required"))]
    pub address: String,
    #[serde(default)]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePlaceFilter {
    pub id: Option<DbId>,
    pub address: Option<String>,
    pub administrator: Option<String>,
    pub phone: Option<String>,
}
