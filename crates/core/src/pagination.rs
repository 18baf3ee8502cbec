//! Page/page-size handling shared by every paginated listing.
//!
//! Requests carry a 1-based `page` and a `pageSize`; responses wrap the
//! records together with the total number of rows matching the same filter.

use serde::{Deserialize, Serialize};

/// Page used when the request omits it or sends a non-positive value.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request omits it or sends a non-positive value.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A clamped page window. Always `page >= 1` and `page_size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Pagination {
    /// Clamp raw request values, replacing missing or non-positive ones with
    /// the defaults.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE),
            page_size: page_size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Row offset of the first record on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Body of a `POST /{entity}/page` request: the page window plus the
/// entity-specific filter fields flattened alongside it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery<F> {
    pub page: Option<i64>,
    #[serde(alias = "size")]
    pub page_size: Option<i64>,
    #[serde(flatten)]
    pub filter: F,
}

impl<F> PageQuery<F> {
    pub fn new(page: i64, page_size: i64, filter: F) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            filter,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Number of rows matching the filter across all pages.
    pub total_count: i64,
    pub records: Vec<T>,
    pub page: i64,
    pub page_size: i64,
}

impl<T> PageResult<T> {
    pub fn new(records: Vec<T>, total_count: i64, pagination: Pagination) -> Self {
        Self {
            total_count,
            records,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }
}
