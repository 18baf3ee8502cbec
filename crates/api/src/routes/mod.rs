pub mod health;
pub mod logistics;
pub mod product;
pub mod trace;
pub mod upload;
pub mod user;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::handlers::crud;
use crate::services::{
    CompanyService, CrudService, ProductionInfoService, ProductionPlaceService, SaleInfoService,
    SalePlaceService,
};
use crate::state::AppState;

/// Build the full route tree. Entity groups are mounted at the root.
///
/// ```text
/// /company            company CRUD
/// /product            product CRUD, types, search
/// /productionPlace    production place CRUD
/// /productionInfo     production batch CRUD
/// /logistics          shipment CRUD, confirm receipt
/// /salePlace          sale place CRUD
/// /saleInfo           sale event CRUD
/// /traceability       trace lookups
/// /upload             image upload
/// /user               accounts
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/company", crud_routes::<CompanyService>())
        .nest("/product", product::router())
        .nest("/productionPlace", crud_routes::<ProductionPlaceService>())
        .nest("/productionInfo", crud_routes::<ProductionInfoService>())
        .nest("/logistics", logistics::router())
        .nest("/salePlace", crud_routes::<SalePlaceService>())
        .nest("/saleInfo", crud_routes::<SaleInfoService>())
        .nest("/traceability", trace::router())
        .nest("/user", user::router())
        .merge(upload::router(config.upload_max_bytes))
}

/// Routes every entity group exposes.
///
/// ```text
/// POST   /          create
/// PUT    /          update (id in body)
/// GET    /list      list all
/// POST   /page      paginated search
/// GET    /{id}      get by id
/// DELETE /{id}      delete
/// ```
pub fn crud_routes<S>() -> Router<AppState>
where
    S: CrudService + FromRef<AppState> + 'static,
    S::Record: Serialize + 'static,
    S::Create: DeserializeOwned + 'static,
    S::Update: DeserializeOwned + 'static,
    S::Filter: DeserializeOwned + 'static,
{
    Router::new()
        .route("/", post(crud::create::<S>).put(crud::update::<S>))
        .route("/list", get(crud::list::<S>))
        .route("/page", post(crud::page::<S>))
        .route("/{id}", get(crud::get_by_id::<S>).delete(crud::delete::<S>))
}
