//! Repository for the `companies` table.

use agritrace_core::types::DbId;
use sqlx::QueryBuilder;

use crate::models::company::{Company, CompanyFilter, CreateCompany, UpdateCompany};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type CompanyRepo = Repo<Company>;

impl Schema for Company {
    type Filter = CompanyFilter;

    const ENTITY: &'static str = "Company";
    const TABLE: &'static str = "companies";
    const COLUMNS: &'static str = "id, name, address, administrator, phone";
    const FROM: &'static str = "companies";
    const ID_COLUMN: &'static str = "id";

    fn push_filters(filter: &CompanyFilter, conditions: &mut Conditions<'_>) {
        conditions.contains("name", filter.name.as_deref());
        conditions.contains("address", filter.address.as_deref());
        conditions.contains("administrator", filter.administrator.as_deref());
        conditions.contains("phone", filter.phone.as_deref());
    }
}

impl Persist for Company {
    type Create = CreateCompany;
    type Update = UpdateCompany;

    fn insert(input: &CreateCompany) -> Builder {
        let mut query = QueryBuilder::new("INSERT INTO companies (name, address, administrator, phone) ");
        query.push_values([input], |mut row, c| {
            row.push_bind(c.name.clone())
                .push_bind(c.address.clone())
                .push_bind(c.administrator.clone())
                .push_bind(c.phone.clone());
        });
        query
    }

    fn replace(input: &UpdateCompany) -> Builder {
        let mut query = QueryBuilder::new("UPDATE companies SET ");
        query
            .separated(", ")
            .push("name = ")
            .push_bind_unseparated(input.name.clone())
            .push("address = ")
            .push_bind_unseparated(input.address.clone())
            .push("administrator = ")
            .push_bind_unseparated(input.administrator.clone())
            .push("phone = ")
            .push_bind_unseparated(input.phone.clone());
        query
    }

    fn update_id(input: &UpdateCompany) -> DbId {
        input.id
    }
}
