//! Repository for the `logistics` table.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::logistics::{
    CreateLogistics, LogisticsDetail, LogisticsFilter, UpdateLogistics,
};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type LogisticsRepo = Repo<LogisticsDetail>;

impl Schema for LogisticsDetail {
    type Filter = LogisticsFilter;

    const ENTITY: &'static str = "Logistics";
    const TABLE: &'static str = "logistics";
    const COLUMNS: &'static str = "l.id, l.production_info_id, l.company_id, l.start_location, \
         l.destination, l.start_time, l.end_time, \
         COALESCE(p.name, '') AS product_name, \
         COALESCE(c.name, '') AS company_name, \
         COALESCE(c.administrator, '') AS company_administrator, \
         COALESCE(c.phone, '') AS company_phone";
    const FROM: &'static str = "logistics l \
         LEFT JOIN production_infos pi ON pi.id = l.production_info_id \
         LEFT JOIN products p ON p.id = pi.product_id \
         LEFT JOIN companies c ON c.id = l.company_id";
    const ID_COLUMN: &'static str = "l.id";

    fn push_filters(filter: &LogisticsFilter, conditions: &mut Conditions<'_>) {
        conditions.equals_id("l.id", filter.id);
        conditions.contains("p.name", filter.product_name.as_deref());
        conditions.contains("c.name", filter.company_name.as_deref());
        conditions.contains("l.start_location", filter.start_location.as_deref());
        conditions.contains("l.destination", filter.destination.as_deref());
        conditions.contains("c.administrator", filter.administrator.as_deref());
        conditions.on_day("l.start_time", filter.start_date);
        conditions.is_set("l.end_time", filter.delivered);
    }
}

impl Persist for LogisticsDetail {
    type Create = CreateLogistics;
    type Update = UpdateLogistics;

    fn insert(input: &CreateLogistics) -> Builder {
        let mut query = QueryBuilder::new(
            "INSERT INTO logistics \
             (production_info_id, company_id, start_location, destination, start_time, end_time) ",
        );
        query.push_values([input], |mut row, l| {
            row.push_bind(l.production_info_id)
                .push_bind(l.company_id)
                .push_bind(l.start_location.clone())
                .push_bind(l.destination.clone())
                .push_bind(l.start_time)
                .push_bind(l.end_time);
        });
        query
    }

    fn replace(input: &UpdateLogistics) -> Builder {
        let mut query = QueryBuilder::new("UPDATE logistics SET ");
        query
            .separated(", ")
            .push("production_info_id = ")
            .push_bind_unseparated(input.production_info_id)
            .push("company_id = ")
            .push_bind_unseparated(input.company_id)
            .push("start_location = ")
            .push_bind_unseparated(input.start_location.clone())
            .push("destination = ")
            .push_bind_unseparated(input.destination.clone())
            .push("start_time = ")
            .push_bind_unseparated(input.start_time)
            .push("end_time = ")
            .push_bind_unseparated(input.end_time);
        query
    }

    fn update_id(input: &UpdateLogistics) -> DbId {
        input.id
    }
}
