//! Logistics shipment model and DTOs.

use agritrace_core::search::deserialize_day;
use agritrace_core::shipment::ShipmentStatus;
use agritrace_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `logistics` row joined with the shipped product (through its production
/// batch) and the carrying company.
///
/// `end_time` is `None` while the shipment is in transit.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsDetail {
    pub id: DbId,
    pub production_info_id: DbId,
    pub company_id: DbId,
    pub start_location: String,
    pub destination: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub product_name: String,
    pub company_name: String,
    pub company_administrator: String,
    pub company_phone: String,
}

impl LogisticsDetail {
    pub fn status(&self) -> ShipmentStatus {
        ShipmentStatus::from_end_time(self.end_time)
    }

    /// Replacement payload carrying this record's stored values.
    pub fn to_update(&self) -> UpdateLogistics {
        UpdateLogistics {
            id: self.id,
            production_info_id: self.production_info_id,
            company_id: self.company_id,
            start_location: self.start_location.clone(),
            destination: self.destination.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogistics {
    #[serde(alias = "productInfoId")]
    #[validate(range(min = 1, message = "Production info id must be positive"))]
    pub production_info_id: DbId,
    #[validate(range(min = 1, message = "Company id must be positive"))]
    pub company_id: DbId,
    #[validate(length(min = 1, message = "Start location is required"))]
    pub start_location: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    pub start_time: Timestamp,
    #[serde(default)]
    pub end_time: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogistics {
    #[validate(range(min = 1, message = "Logistics id must be positive"))]
    pub id: DbId,
    #[serde(alias = "productInfoId")]
    #[validate(range(min = 1, message = "Production info id must be positive"))]
    pub production_info_id: DbId,
    #[validate(range(min = 1, message = "Company id must be positive"))]
    pub company_id: DbId,
    #[validate(length(min = 1, message = "Start location is required"))]
    pub start_location: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    pub start_time: Timestamp,
    #[serde(default)]
    pub end_time: Option<Timestamp>,
}

/// Logistics listing filter.
///
/// `administrator` matches the company administrator, `start_date` matches
/// the UTC day of `start_time`, `delivered` selects by whether receipt was
/// confirmed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsFilter {
    pub id: Option<DbId>,
    #[serde(alias = "pdName")]
    pub product_name: Option<String>,
    #[serde(alias = "comName")]
    pub company_name: Option<String>,
    pub start_location: Option<String>,
    pub destination: Option<String>,
    #[serde(alias = "comAdministrator")]
    pub administrator: Option<String>,
    #[serde(default, alias = "startTime", deserialize_with = "deserialize_day")]
    pub start_date: Option<NaiveDate>,
    pub delivered: Option<bool>,
}
