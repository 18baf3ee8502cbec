//! Read-only traceability lookups.
//!
//! Each lookup forwards to the matching service and reports every miss as
//! the same "Trace record" not-found, whichever table was consulted.

use agritrace_core::error::{CoreError, CoreResult};
use agritrace_core::trace::{TraceLink, TRACE_ENTITY};
use agritrace_core::types::DbId;
use agritrace_db::models::logistics::LogisticsDetail;
use agritrace_db::models::product::Product;
use agritrace_db::models::production_info::ProductionInfoDetail;
use agritrace_db::models::sale_info::SaleInfoDetail;
use agritrace_db::DbPool;
use serde::Serialize;

use super::{
    CrudService, LogisticsService, ProductService, ProductionInfoService, SaleInfoService,
};

/// Any record a trace lookup can return.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TraceRecord {
    ProductionInfo(ProductionInfoDetail),
    Product(Product),
    Logistics(LogisticsDetail),
    SaleInfo(SaleInfoDetail),
}

#[derive(Clone)]
pub struct TraceResolver {
    production: ProductionInfoService,
    products: ProductService,
    logistics: LogisticsService,
    sales: SaleInfoService,
}

impl TraceResolver {
    pub fn new(pool: DbPool) -> Self {
        Self {
            production: ProductionInfoService::new(pool.clone()),
            products: ProductService::new(pool.clone()),
            logistics: LogisticsService::new(pool.clone()),
            sales: SaleInfoService::new(pool),
        }
    }

    pub async fn production_info(&self, id: DbId) -> CoreResult<ProductionInfoDetail> {
        normalize(self.production.get(id).await, id)
    }

    pub async fn product(&self, id: DbId) -> CoreResult<Product> {
        normalize(self.products.get(id).await, id)
    }

    pub async fn logistics(&self, id: DbId) -> CoreResult<LogisticsDetail> {
        normalize(self.logistics.get(id).await, id)
    }

    pub async fn sale_info(&self, id: DbId) -> CoreResult<SaleInfoDetail> {
        normalize(self.sales.get(id).await, id)
    }

    /// Dispatch on the link kind.
    pub async fn resolve(&self, link: TraceLink, id: DbId) -> CoreResult<TraceRecord> {
        let record = match link {
            TraceLink::ProductionInfo => TraceRecord::ProductionInfo(self.production_info(id).await?),
            TraceLink::Product => TraceRecord::Product(self.product(id).await?),
            TraceLink::Logistics => TraceRecord::Logistics(self.logistics(id).await?),
            TraceLink::SaleInfo => TraceRecord::SaleInfo(self.sale_info(id).await?),
        };
        tracing::debug!(%link, id, "Trace record resolved");
        Ok(record)
    }
}

fn normalize<T>(result: CoreResult<T>, id: DbId) -> CoreResult<T> {
    result.map_err(|err| {
        if err.is_not_found() {
            CoreError::not_found(TRACE_ENTITY, id)
        } else {
            err
        }
    })
}
