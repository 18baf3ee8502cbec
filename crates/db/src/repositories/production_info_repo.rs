//! Repository for the `production_infos` table.
//!
//! Reads always join the product and production place; a missing side
//! yields empty strings.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::production_info::{
    CreateProductionInfo, ProductionInfoDetail, ProductionInfoFilter, UpdateProductionInfo,
};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type ProductionInfoRepo = Repo<ProductionInfoDetail>;

impl Schema for ProductionInfoDetail {
    type Filter = ProductionInfoFilter;

    const ENTITY: &'static str = "Production info";
    const TABLE: &'static str = "production_infos";
    const COLUMNS: &'static str = "pi.id, pi.product_id, pi.production_place_id, pi.seed_source, \
         pi.description, pi.planting_date, pi.harvest_date, \
         COALESCE(p.name, '') AS product_name, \
         COALESCE(pp.address, '') AS place_address, \
         COALESCE(pp.administrator, '') AS place_administrator, \
         COALESCE(pp.phone, '') AS place_phone";
    const FROM: &'static str = "production_infos pi \
         LEFT JOIN products p ON p.id = pi.product_id \
         LEFT JOIN production_places pp ON pp.id = pi.production_place_id";
    const ID_COLUMN: &'static str = "pi.id";

    fn push_filters(filter: &ProductionInfoFilter, conditions: &mut Conditions<'_>) {
        conditions.equals_id("pi.id", filter.id);
        conditions.contains("p.name", filter.product_name.as_deref());
        conditions.contains("pp.address", filter.place_address.as_deref());
        conditions.contains("pi.seed_source", filter.seed_source.as_deref());
        conditions.contains("pp.administrator", filter.administrator.as_deref());
    }
}

impl Persist for ProductionInfoDetail {
    type Create = CreateProductionInfo;
    type Update = UpdateProductionInfo;

    fn insert(input: &CreateProductionInfo) -> Builder {
        let mut query = QueryBuilder::new(
            "INSERT INTO production_infos \
             (product_id, production_place_id, seed_source, description, planting_date, harvest_date) ",
        );
        query.push_values([input], |mut row, p| {
            row.push_bind(p.product_id)
                .push_bind(p.production_place_id)
                .push_bind(p.seed_source.clone())
                .push_bind(p.description.clone())
                .push_bind(p.planting_date)
                .push_bind(p.harvest_date);
        });
        query
    }

    fn replace(input: &UpdateProductionInfo) -> Builder {
        let mut query = QueryBuilder::new("UPDATE production_infos SET ");
        query
            .separated(", ")
            .push("product_id = ")
            .push_bind_unseparated(input.product_id)
            .push("production_place_id = ")
            .push_bind_unseparated(input.production_place_id)
            .push("seed_source = ")
            .push_bind_unseparated(input.seed_source.clone())
            .push("description = ")
            .push_bind_unseparated(input.description.clone())
            .push("planting_date = ")
            .push_bind_unseparated(input.planting_date)
            .push("harvest_date = ")
            .push_bind_unseparated(input.harvest_date);
        query
    }

    fn update_id(input: &UpdateProductionInfo) -> DbId {
        input.id
    }
}
