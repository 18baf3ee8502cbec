use agritrace_core::error::CoreResult;
use agritrace_db::models::product::Product;
use agritrace_db::repositories::ProductRepo;
use agritrace_db::store::Schema;

use super::{storage_error, ProductService};

impl ProductService {
    /// Distinct product types currently in use, sorted.
    pub async fn types(&self) -> CoreResult<Vec<String>> {
        ProductRepo::types(self.pool())
            .await
            .map_err(storage_error(Product::ENTITY, "list types of"))
    }
}
