//! Per-table schemas for the generic [`Repo`](crate::store::Repo).
//!
//! Each module maps one entity onto its table and exposes a `XxxRepo` alias.
//! Entity-specific queries live as inherent methods on that alias.

pub mod company_repo;
pub mod logistics_repo;
pub mod product_repo;
pub mod production_info_repo;
pub mod production_place_repo;
pub mod sale_info_repo;
pub mod sale_place_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use logistics_repo::LogisticsRepo;
pub use product_repo::ProductRepo;
pub use production_info_repo::ProductionInfoRepo;
pub use production_place_repo::ProductionPlaceRepo;
pub use sale_info_repo::SaleInfoRepo;
pub use sale_place_repo::SalePlaceRepo;
pub use user_repo::UserRepo;
