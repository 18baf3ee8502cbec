//! Repository for the `products` table.

use agritrace_core::types::DbId;
use sqlx::{PgPool, QueryBuilder};

use crate::models::product::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

pub type ProductRepo = Repo<Product>;

impl Schema for Product {
    type Filter = ProductFilter;

    const ENTITY: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = "id, name, product_type, image, description, unit_price";
    const FROM: &'static str = "products";
    const ID_COLUMN: &'static str = "id";

    fn push_filters(filter: &ProductFilter, conditions: &mut Conditions<'_>) {
        conditions.contains("name", filter.name.as_deref());
        conditions.equals_text("product_type", filter.product_type.as_deref());
    }
}

impl Persist for Product {
    type Create = CreateProduct;
    type Update = UpdateProduct;

    fn insert(input: &CreateProduct) -> Builder {
        let mut query = QueryBuilder::new(
            "INSERT INTO products (name, product_type, image, description, unit_price) ",
        );
        query.push_values([input], |mut row, p| {
            row.push_bind(p.name.clone())
                .push_bind(p.product_type.clone())
                .push_bind(p.image.clone())
                .push_bind(p.description.clone())
                .push_bind(p.unit_price);
        });
        query
    }

    fn replace(input: &UpdateProduct) -> Builder {
        let mut query = QueryBuilder::new("UPDATE products SET ");
        query
            .separated(", ")
            .push("name = ")
            .push_bind_unseparated(input.name.clone())
            .push("product_type = ")
            .push_bind_unseparated(input.product_type.clone())
            .push("image = ")
            .push_bind_unseparated(input.image.clone())
            .push("description = ")
            .push_bind_unseparated(input.description.clone())
            .push("unit_price = ")
            .push_bind_unseparated(input.unit_price);
        query
    }

    fn update_id(input: &UpdateProduct) -> DbId {
        input.id
    }
}

impl ProductRepo {
    /// Distinct product types in alphabetical order.
    pub async fn types(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT product_type FROM products ORDER BY product_type",
        )
        .fetch_all(pool)
        .await
    }
}
