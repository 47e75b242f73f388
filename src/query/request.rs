//! Paging request envelope and response shapes
//!
//! Parameters are read from the URL query string by the paged route
//! wrapper (`server::paging`), never bound by endpoint code. Bounds are
//! enforced by rejection: out-of-range values are a `PAGING_RANGE`
//! client error for both `page` and `pageSize`, uniformly.

use crate::core::error::{PagingError, PagingResult};
use crate::core::record::SortDirection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Paging bounds, sourced from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Page size applied when the caller sends none
    pub default_page_size: u64,
    /// Largest accepted page size
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Raw query-string arguments of a request.
///
/// The paged wrapper hands a copy to the endpoint's producer so domain
/// parameters (e.g. a username prefix) stay available without the
/// endpoint re-declaring pagination fields.
#[derive(Debug, Clone, Default)]
pub struct QueryArgs(HashMap<String, String>);

impl QueryArgs {
    pub fn new(args: HashMap<String, String>) -> Self {
        Self(args)
    }

    /// Get a raw argument by exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Parsed pagination parameters for a single request
///
/// # Wire format
/// ```text
/// GET /users?page=2&pageSize=10&sortField=username&sortDirection=desc
/// GET /wines?filter={"vintage": 2019}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page number
    pub page: u64,
    /// Number of items per page
    pub page_size: u64,
    /// Explicit sort field, if the caller named one
    pub sort_field: Option<String>,
    /// Sort direction (defaults to ascending)
    pub sort_direction: SortDirection,
    /// Raw JSON filter blob, if any
    pub filter: Option<String>,
}

impl PageQuery {
    /// Parse pagination parameters from the raw query-string map.
    ///
    /// Missing parameters take their defaults (`page` 0, `pageSize` from
    /// `limits`). A `page` that is negative or non-numeric, or a
    /// `pageSize` that is non-numeric, zero, negative or above the
    /// configured maximum, is rejected with [`PagingError::PageOutOfRange`].
    pub fn from_args(args: &QueryArgs, limits: &PageLimits) -> PagingResult<Self> {
        let page = match args.get("page") {
            None => 0,
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|p| *p >= 0)
                .ok_or_else(|| PagingError::PageOutOfRange {
                    parameter: "page",
                    value: raw.to_string(),
                })? as u64,
        };

        let page_size = match args.get("pageSize") {
            None => limits.default_page_size,
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|s| *s > 0 && *s as u64 <= limits.max_page_size)
                .ok_or_else(|| PagingError::PageOutOfRange {
                    parameter: "pageSize",
                    value: raw.to_string(),
                })? as u64,
        };

        let sort_field = args
            .get("sortField")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let sort_direction = args
            .get("sortDirection")
            .map(SortDirection::parse_lenient)
            .unwrap_or_default();

        let filter = args
            .get("filter")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            page,
            page_size,
            sort_field,
            sort_direction,
            filter,
        })
    }

    /// Number of records to skip before the requested window.
    ///
    /// Saturates on overflow: any accepted `page` that large lands past
    /// the end of any real dataset, yielding an empty window.
    pub fn skip(&self) -> usize {
        self.page.saturating_mul(self.page_size) as usize
    }

    /// Size of the requested window
    pub fn take(&self) -> usize {
        self.page_size as usize
    }
}

/// Paged response envelope
///
/// `total_count` is the size of the *filtered* sequence before
/// pagination; `items` is at most one page of the filtered-and-sorted
/// sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}
