//! Repository for the `production_places` table.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::production_place::{
    CreateProductionPlace, ProductionPlace, ProductionPlaceFilter, UpdateProductionPlace,
};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type ProductionPlaceRepo = Repo<ProductionPlace>;

impl Schema for ProductionPlace {
    type Filter = ProductionPlaceFilter;

    const ENTITY: &'static str = "Production place";
    const TABLE: &'static str = "production_places";
    const COLUMNS: &'static str = "id, address, administrator, phone";
    const FROM: &'static str = "production_places";
    const ID_COLUMN: &'static str = "id";

    fn push_filters(filter: &ProductionPlaceFilter, conditions: &mut Conditions<'_>) {
        conditions.equals_id("id", filter.id);
        conditions.contains("address", filter.address.as_deref());
        conditions.contains("administrator", filter.administrator.as_deref());
        conditions.contains("phone", filter.phone.as_deref());
    }
}

impl Persist for ProductionPlace {
    type Create = CreateProductionPlace;
    type Update = UpdateProductionPlace;

    fn insert(input: &CreateProductionPlace) -> Builder {
        let mut query =
            QueryBuilder::new("INSERT INTO production_places (address, administrator, phone) ");
        query.push_values([input], |mut row, p| {
            row.push_bind(p.address.clone())
                .push_bind(p.administrator.clone())
                .push_bind(p.phone.clone());
        });
        query
    }

    fn replace(input: &UpdateProductionPlace) -> Builder {
        let mut query = QueryBuilder::new("UPDATE production_places SET ");
        query
            .separated(", ")
            .push("address = ")
            .push_bind_unseparated(input.address.clone())
            .push("administrator = ")
            .push_bind_unseparated(input.administrator.clone())
            .push("phone = ")
            .push_bind_unseparated(input.phone.clone());
        query
    }

    fn update_id(input: &UpdateProductionPlace) -> DbId {
        input.id
    }
}
