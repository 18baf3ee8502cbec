//! Retail sale event model and DTOs.

use agritrace_core::search::deserialize_day;
use agritrace_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `sale_infos` row joined with its sale place and the shipment it came
/// from, including the product name reached through that shipment.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfoDetail {
    pub id: DbId,
    pub logistics_id: DbId,
    pub sale_place_id: DbId,
    pub description: String,
    pub sale_time: Timestamp,
    pub product_name: String,
    pub sale_place_address: String,
    pub sale_place_administrator: String,
    pub start_location: String,
    pub destination: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleInfo {
    #[validate(range(min = 1, message = "Logistics id must be positive"))]
    pub logistics_id: DbId,
    #[validate(range(min = 1, message = "Sale place id must be positive"))]
    pub sale_place_id: DbId,
    #[serde(default)]
    pub description: String,
    pub sale_time: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleInfo {
    #[validate(range(min = 1, message = "Sale info id must be positive"))]
    pub id: DbId,
    #[validate(range(min = 1, message = "Logistics id must be positive"))]
    pub logistics_id: DbId,
    #[validate(range(min = 1, message = "Sale place id must be positive"))]
    pub sale_place_id: DbId,
    #[serde(default)]
    pub description: String,
    pub sale_time: Timestamp,
}

/// Sale listing filter. `sale_place` matches the sale place address,
/// `sale_date` the UTC day of `sale_time`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfoFilter {
    #[serde(alias = "saleInfoId")]
    pub id: Option<DbId>,
    pub product_name: Option<String>,
    pub sale_place: Option<String>,
    #[serde(default, alias = "saleTime", deserialize_with = "deserialize_day")]
    pub sale_date: Option<NaiveDate>,
}
