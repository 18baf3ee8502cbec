//! Domain services between the HTTP handlers and the store.
//!
//! Every entity is served through the same [`CrudService`] contract. The
//! seven traceability entities share one generic implementation,
//! [`EntityService`]; users get their own because of password hashing and
//! username uniqueness. Storage failures are logged here and leave the
//! service as [`CoreError::Internal`].

use std::marker::PhantomData;

use agritrace_core::error::{CoreError, CoreResult};
use agritrace_core::pagination::{PageQuery, PageResult};
use agritrace_core::types::DbId;
use agritrace_db::models::company::Company;
use agritrace_db::models::logistics::LogisticsDetail;
use agritrace_db::models::product::Product;
use agritrace_db::models::production_info::ProductionInfoDetail;
use agritrace_db::models::production_place::ProductionPlace;
use agritrace_db::models::sale_info::SaleInfoDetail;
use agritrace_db::models::sale_place::SalePlace;
use agritrace_db::store::{Persist, Repo};
use agritrace_db::DbPool;
use async_trait::async_trait;
use validator::Validate;

mod logistics;
mod product;
mod trace;
mod user;

pub use trace::{TraceRecord, TraceResolver};
pub use user::{UserService, USERNAME_TAKEN};

/// Uniform create/update/delete/get/list/page contract.
#[async_trait]
pub trait CrudService: Send + Sync {
    type Record: Send;
    type Create: Send + Sync;
    type Update: Send + Sync;
    type Filter: Default + Send + Sync;

    /// Validate and insert, returning the new id.
    async fn create(&self, input: &Self::Create) -> CoreResult<DbId>;

    /// Replace an existing record. Fails with `NotFound` if it is gone.
    async fn update(&self, input: &Self::Update) -> CoreResult<()>;

    /// Delete an existing record. Fails with `NotFound` if it is gone.
    async fn delete(&self, id: DbId) -> CoreResult<()>;

    async fn get(&self, id: DbId) -> CoreResult<Self::Record>;

    async fn list(&self, filter: &Self::Filter) -> CoreResult<Vec<Self::Record>>;

    /// One clamped page of records matching the query's filter.
    async fn page(&self, query: &PageQuery<Self::Filter>)
        -> CoreResult<PageResult<Self::Record>>;
}

pub type CompanyService = EntityService<Company>;
pub type ProductService = EntityService<Product>;
pub type ProductionPlaceService = EntityService<ProductionPlace>;
pub type ProductionInfoService = EntityService<ProductionInfoDetail>;
pub type LogisticsService = EntityService<LogisticsDetail>;
pub type SalePlaceService = EntityService<SalePlace>;
pub type SaleInfoService = EntityService<SaleInfoDetail>;

/// [`CrudService`] over any entity the generic store can persist.
pub struct EntityService<S> {
    pool: DbPool,
    _entity: PhantomData<fn() -> S>,
}

impl<S> EntityService<S> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl<S> Clone for EntityService<S> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<S: Persist> EntityService<S> {
    async fn ensure_exists(&self, id: DbId) -> CoreResult<()> {
        let exists = Repo::<S>::exists(&self.pool, id)
            .await
            .map_err(storage_error(S::ENTITY, "look up"))?;
        if exists {
            Ok(())
        } else {
            Err(CoreError::not_found(S::ENTITY, id))
        }
    }
}

#[async_trait]
impl<S: Persist> CrudService for EntityService<S> {
    type Record = S;
    type Create = S::Create;
    type Update = S::Update;
    type Filter = S::Filter;

    async fn create(&self, input: &S::Create) -> CoreResult<DbId> {
        validate_input(input)?;
        let id = Repo::<S>::create(&self.pool, input)
            .await
            .map_err(storage_error(S::ENTITY, "create"))?;
        tracing::info!(entity = S::ENTITY, id, "Record created");
        Ok(id)
    }

    async fn update(&self, input: &S::Update) -> CoreResult<()> {
        validate_input(input)?;
        let id = S::update_id(input);
        self.ensure_exists(id).await?;

        let updated = Repo::<S>::replace(&self.pool, input)
            .await
            .map_err(storage_error(S::ENTITY, "update"))?;
        if !updated {
            return Err(CoreError::not_found(S::ENTITY, id));
        }
        tracing::info!(entity = S::ENTITY, id, "Record updated");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> CoreResult<()> {
        self.ensure_exists(id).await?;

        let deleted = Repo::<S>::delete(&self.pool, id)
            .await
            .map_err(storage_error(S::ENTITY, "delete"))?;
        if !deleted {
            return Err(CoreError::not_found(S::ENTITY, id));
        }
        tracing::info!(entity = S::ENTITY, id, "Record deleted");
        Ok(())
    }

    async fn get(&self, id: DbId) -> CoreResult<S> {
        Repo::<S>::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error(S::ENTITY, "load"))?
            .ok_or_else(|| CoreError::not_found(S::ENTITY, id))
    }

    async fn list(&self, filter: &S::Filter) -> CoreResult<Vec<S>> {
        Repo::<S>::list(&self.pool, filter)
            .await
            .map_err(storage_error(S::ENTITY, "list"))
    }

    async fn page(&self, query: &PageQuery<S::Filter>) -> CoreResult<PageResult<S>> {
        let pagination = query.pagination();
        let (records, total) = Repo::<S>::page(&self.pool, &query.filter, pagination)
            .await
            .map_err(storage_error(S::ENTITY, "page"))?;
        Ok(PageResult::new(records, total, pagination))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Log a storage failure with its context and convert it to
/// [`CoreError::Internal`].
pub(crate) fn storage_error(
    entity: &'static str,
    operation: &'static str,
) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(entity, operation, error = %err, "Storage operation failed");
        CoreError::Internal(format!("Failed to {operation} {entity}"))
    }
}

/// Run `validator` rules, mapping failures to [`CoreError::Validation`].
pub(crate) fn validate_input<T: Validate>(input: &T) -> CoreResult<()> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
