//! Repository for the `sale_places` table.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::sale_place::{CreateSalePlace, SalePlace, SalePlaceFilter, UpdateSalePlace};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type SalePlaceRepo = Repo<SalePlace>;

impl Schema for SalePlace {
    type Filter = SalePlaceFilter;

    const ENTITY: &'static str = "Sale place";
    const TABLE: &'static str = "sale_places";
    const COLUMNS: &'static str = "id, address, administrator, phone";
    const FROM: &'static str = "sale_places";
    const ID_COLUMN: &'static str = "id";

    fn push_filters(filter: &SalePlaceFilter, conditions: &mut Conditions<'_>) {
        conditions.equals_id("id", filter.id);
        conditions.contains("address", filter.address.as_deref());
        conditions.contains("administrator", filter.administrator.as_deref());
        conditions.contains("phone", filter.phone.as_deref());
    }
}

impl Persist for SalePlace {
    type Create = CreateSalePlace;
    type Update = UpdateSalePlace;

    fn insert(input: &CreateSalePlace) -> Builder {
        let mut query = QueryBuilder::new("INSERT INTO sale_places (address, administrator, phone) ");
        query.push_values([input], |mut row, s| {
            row.push_bind(s.address.clone())
                .push_bind(s.administrator.clone())
                .push_bind(s.phone.clone());
        });
        query
    }

    fn replace(input: &UpdateSalePlace) -> Builder {
        let mut query = QueryBuilder::new("UPDATE sale_places SET ");
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

    fn update_id(input: &UpdateSalePlace) -> DbId {
        input.id
    }
}
