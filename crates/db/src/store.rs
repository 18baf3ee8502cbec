//! Generic table access shared by every entity.
//!
//! An entity describes its table once through [`Schema`] (projection, joins,
//! filter predicate) and [`Persist`] (insert and full-record replace). The
//! [`Repo`] type then provides get/list/page/delete/create/replace for it.
//! The same projection backs single-record reads, listings and pages, so a
//! detail view looks identical whichever way it was fetched.

use std::marker::PhantomData;

use agritrace_core::pagination::Pagination;
use agritrace_core::search::{day_bounds, id_filter, like_pattern, text_filter};
use agritrace_core::types::DbId;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use validator::Validate;

/// Query builder whose binds are all owned values.
pub type Builder = QueryBuilder<'static, Postgres>;

/// Read-side description of one entity table.
pub trait Schema: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Optional filter fields accepted by listings and pages.
    type Filter: Default + Send + Sync;

    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;
    /// Physical table targeted by deletes and existence checks.
    const TABLE: &'static str;
    /// `SELECT` projection, including any denormalized join columns.
    const COLUMNS: &'static str;
    /// `FROM` clause including joins.
    const FROM: &'static str;
    /// Qualified id column used for lookups and ordering.
    const ID_COLUMN: &'static str;

    /// Append this entity's filter predicates.
    fn push_filters(filter: &Self::Filter, conditions: &mut Conditions<'_>);
}

/// Write-side description: how to insert and fully replace a record.
pub trait Persist: Schema {
    type Create: Validate + Send + Sync;
    type Update: Validate + Send + Sync;

    /// `INSERT INTO ... VALUES (...)` without a `RETURNING` clause.
    fn insert(input: &Self::Create) -> Builder;
    /// `UPDATE ... SET ...` without a `WHERE` clause.
    fn replace(input: &Self::Update) -> Builder;
    /// Id of the record an update targets.
    fn update_id(input: &Self::Update) -> DbId;
}

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Accumulates `WHERE`/`AND` predicates on a query. Absent values, empty
/// strings and zero ids add nothing.
pub struct Conditions<'q> {
    query: &'q mut Builder,
    pushed: usize,
}

impl<'q> Conditions<'q> {
    pub fn new(query: &'q mut Builder) -> Self {
        Self { query, pushed: 0 }
    }

    fn next(&mut self) -> &mut Builder {
        self.query
            .push(if self.pushed == 0 { " WHERE " } else { " AND " });
        self.pushed += 1;
        &mut *self.query
    }

    /// Substring match on a text column.
    pub fn contains(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = text_filter(value) {
            let pattern = like_pattern(value);
            self.next().push(column).push(" LIKE ").push_bind(pattern);
        }
    }

    /// Exact match on a text column.
    pub fn equals_text(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = text_filter(value) {
            let value = value.to_string();
            self.next().push(column).push(" = ").push_bind(value);
        }
    }

    /// Exact match on an id column.
    pub fn equals_id(&mut self, column: &str, value: Option<DbId>) {
        if let Some(value) = id_filter(value) {
            self.next().push(column).push(" = ").push_bind(value);
        }
    }

    /// Match a `TIMESTAMPTZ` column against one whole UTC day.
    pub fn on_day(&mut self, column: &str, day: Option<NaiveDate>) {
        let Some(day) = day else { return };
        let (start, end) = day_bounds(day);
        let query = self.next();
        query.push(column).push(" >= ").push_bind(start);
        if let Some(end) = end {
            query.push(" AND ").push(column).push(" < ").push_bind(end);
        }
    }

    /// `IS NOT NULL` when `true`, `IS NULL` when `false`.
    pub fn is_set(&mut self, column: &str, value: Option<bool>) {
        if let Some(set) = value {
            let test = if set { " IS NOT NULL" } else { " IS NULL" };
            self.next().push(column).push(test);
        }
    }

    /// Number of predicates appended so far.
    pub fn len(&self) -> usize {
        self.pushed
    }

    pub fn is_empty(&self) -> bool {
        self.pushed == 0
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Table access for entity `S`. Never instantiated; all methods are
/// associated functions taking the pool.
pub struct Repo<S>(PhantomData<fn() -> S>);

fn select<S: Schema>() -> Builder {
    QueryBuilder::new(format!("SELECT {} FROM {}", S::COLUMNS, S::FROM))
}

impl<S: Schema> Repo<S> {
    /// Find a record by id. Returns `None` when no row exists.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<S>, sqlx::Error> {
        let mut query = select::<S>();
        query.push(" WHERE ").push(S::ID_COLUMN).push(" = ").push_bind(id);
        query.build_query_as::<S>().fetch_optional(pool).await
    }

    /// Every record, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<S>, sqlx::Error> {
        Self::list(pool, &Default::default()).await
    }

    /// Records matching `filter`, ordered by id.
    pub async fn list(pool: &PgPool, filter: &S::Filter) -> Result<Vec<S>, sqlx::Error> {
        let mut query = select::<S>();
        S::push_filters(filter, &mut Conditions::new(&mut query));
        query.push(" ORDER BY ").push(S::ID_COLUMN);
        query.build_query_as::<S>().fetch_all(pool).await
    }

    /// One page of records matching `filter`, plus the total match count.
    ///
    /// Count and page run as two statements without a transaction.
    pub async fn page(
        pool: &PgPool,
        filter: &S::Filter,
        pagination: Pagination,
    ) -> Result<(Vec<S>, i64), sqlx::Error> {
        let mut count: Builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", S::FROM));
        S::push_filters(filter, &mut Conditions::new(&mut count));
        let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

        let mut query = select::<S>();
        S::push_filters(filter, &mut Conditions::new(&mut query));
        query
            .push(" ORDER BY ")
            .push(S::ID_COLUMN)
            .push(" LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());
        let records = query.build_query_as::<S>().fetch_all(pool).await?;

        Ok((records, total))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", S::TABLE);
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a record by id. Returns `true` if a row was removed.
    ///
    /// Rows referencing the deleted record are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", S::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<S: Persist> Repo<S> {
    /// Insert a new record, returning its generated id.
    pub async fn create(pool: &PgPool, input: &S::Create) -> Result<DbId, sqlx::Error> {
        let mut query = S::insert(input);
        query.push(" RETURNING id");
        query.build_query_scalar::<DbId>().fetch_one(pool).await
    }

    /// Overwrite every mutable column of an existing record.
    ///
    /// Returns `false` if no row with the update's id exists.
    pub async fn replace(pool: &PgPool, input: &S::Update) -> Result<bool, sqlx::Error> {
        let mut query = S::replace(input);
        query.push(" WHERE id = ").push_bind(S::update_id(input));
        let result = query.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
