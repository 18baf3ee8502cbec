//! Repository for the `sale_infos` table.
//!
//! The product name is reached through the shipment and its production
//! batch, so a sale shows an empty product name if any link is gone.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::sale_info::{CreateSaleInfo, SaleInfoDetail, SaleInfoFilter, UpdateSaleInfo};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type SaleInfoRepo = Repo<SaleInfoDetail>;

impl Schema for SaleInfoDetail {
    type Filter = SaleInfoFilter;

    const ENTITY: &'static str = "Sale info";
    const TABLE: &'static str = "sale_infos";
    const COLUMNS: &'static str = "s.id, s.logistics_id, s.sale_place_id, s.description, s.sale_time, \
         COALESCE(p.name, '') AS product_name, \
         COALESCE(sp.address, '') AS sale_place_address, \
         COALESCE(sp.administrator, '') AS sale_place_administrator, \
         COALESCE(l.start_location, '') AS start_location, \
         COALESCE(l.destination, '') AS destination";
    const FROM: &'static str = "sale_infos s \
         LEFT JOIN sale_places sp ON sp.id = s.sale_place_id \
         LEFT JOIN logistics l ON l.id = s.logistics_id \
         LEFT JOIN production_infos pi ON pi.id = l.production_info_id \
         LEFT JOIN products p ON p.id = pi.product_id";
    const ID_COLUMN: &'static str = "s.id";

    fn push_filters(filter: &SaleInfoFilter, conditions: &mut Conditions<'_>) {
        conditions.equals_id("s.id", filter.id);
        conditions.contains("p.name", filter.product_name.as_deref());
        conditions.contains("sp.address", filter.sale_place.as_deref());
        conditions.on_day("s.sale_time", filter.sale_date);
    }
}

impl Persist for SaleInfoDetail {
    type Create = CreateSaleInfo;
    type Update = UpdateSaleInfo;

    fn insert(input: &CreateSaleInfo) -> Builder {
        let mut query = QueryBuilder::new(
            "INSERT INTO sale_infos (logistics_id, sale_place_id, description, sale_time) ",
        );
        query.push_values([input], |mut row, s| {
            row.push_bind(s.logistics_id)
                .push_bind(s.sale_place_id)
                .push_bind(s.description.clone())
                .push_bind(s.sale_time);
        });
        query
    }

    fn replace(input: &UpdateSaleInfo) -> Builder {
        let mut query = QueryBuilder::new("UPDATE sale_infos SET ");
        query
            .separated(", ")
            .push("logistics_id = ")
            .push_bind_unseparated(input.logistics_id)
            .push("sale_place_id = ")
            .push_bind_unseparated(input.sale_place_id)
            .push("description = ")
            .push_bind_unseparated(input.description.clone())
            .push("sale_time = ")
            .push_bind_unseparated(input.sale_time);
        query
    }

    fn update_id(input: &UpdateSaleInfo) -> DbId {
        input.id
    }
}
