//! Production place (farm, greenhouse, orchard) model and DTOs.

use agritrace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `production_places` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlace {
    pub id: DbId,
    pub address: String,
    pub administrator: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionPlace {
    #[validate(length(min = 1, message = "Production place address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Production place administrator is required"))]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductionPlace {
    #[validate(range(min = 1, message = "Production place id must be positive"))]
    pub id: DbId,
    #[validate(length(min = 1, message = "Production place address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Production place administrator is required"))]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlaceFilter {
    pub id: Option<DbId>,
    pub address: Option<String>,
    pub administrator: Option<String>,
    pub phone: Option<String>,
}
