//! Product entity model and DTOs.

use agritrace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Product category, e.g. "grain" or "vegetable".
    #[serde(rename = "type")]
    pub product_type: String,
    /// Public URL or path of the product image.
    pub image: String,
    pub description: String,
    pub unit_price: Option<f64>,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Product type is required"))]
    pub product_type: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "Unit price must not be negative"))]
    pub unit_price: Option<f64>,
}

/// DTO for replacing a product. Every field is overwritten.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub id: DbId,
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Product type is required"))]
    pub product_type: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "Unit price must not be negative"))]
    pub unit_price: Option<f64>,
}

/// Product listing filter. `name` is a substring match, `type` is exact.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(alias = "productName")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}
