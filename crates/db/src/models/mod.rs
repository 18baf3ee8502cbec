//! Row types, request DTOs and listing filters, one module per table.

pub mod company;
pub mod logistics;
pub mod product;
pub mod production_info;
pub mod production_place;
pub mod sale_info;
pub mod sale_place;
pub mod user;
