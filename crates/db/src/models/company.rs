//! Company entity model and DTOs.

use agritrace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `companies` table. Companies carry logistics shipments.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub administrator: String,
    pub phone: String,
}

/// DTO for creating a company.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Company address is required"))]
    pub address: String,
    #[serde(default)]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

/// DTO for replacing a company. Every field is overwritten.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    #[validate(range(min = 1, message = "Company id must be positive"))]
    pub id: DbId,
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Company address is required"))]
    pub address: String,
    #[serde(default)]
    pub administrator: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub administrator: Option<String>,
    pub phone: Option<String>,
}
