//! Production batch model: which product was grown where, from what seed,
//! and when it was planted and harvested.

use agritrace_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `production_infos` row joined with its product and production place.
///
/// The joined columns are empty strings when the referenced row no longer
/// exists.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionInfoDetail {
    pub id: DbId,
    pub product_id: DbId,
    pub production_place_id: DbId,
    pub seed_source: String,
    pub description: String,
    pub planting_date: NaiveDate,
    pub harvest_date: NaiveDate,
    pub product_name: String,
    pub place_address: String,
    pub place_administrator: String,
    pub place_phone: String,
}

/// DTO for recording a production batch.
///
/// `planting_date <= harvest_date` is expected but not enforced.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionInfo {
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: DbId,
    #[serde(alias = "productPlaceId")]
    #[validate(range(min = 1, message = "Production place id must be positive"))]
    pub production_place_id: DbId,
    #[serde(alias = "seed")]
    #[validate(length(min = 1, message = "Seed source is required"))]
    pub seed_source: String,
    #[serde(default)]
    pub description: String,
    pub planting_date: NaiveDate,
    pub harvest_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductionInfo {
    #[validate(range(min = 1, message = "Production info id must be positive"))]
    pub id: DbId,
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: DbId,
    #[serde(alias = "productPlaceId")]
    #[validate(range(min = 1, message = "Production place id must be positive"))]
    pub production_place_id: DbId,
    #[serde(alias = "seed")]
    #[validate(length(min = 1, message = "Seed source is required"))]
    pub seed_source: String,
    #[serde(default)]
    pub description: String,
    pub planting_date: NaiveDate,
    pub harvest_date: NaiveDate,
}

/// Production listing filter. `administrator` matches the production
/// place's administrator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionInfoFilter {
    pub id: Option<DbId>,
    pub product_name: Option<String>,
    #[serde(alias = "productPlace")]
    pub place_address: Option<String>,
    #[serde(alias = "seed")]
    pub seed_source: Option<String>,
    pub administrator: Option<String>,
}
