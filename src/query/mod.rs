//! The generic paging, sorting and filtering query engine
//!
//! Any endpoint that returns a lazy record sequence can have pagination,
//! dynamic sort-by-field-name and dynamic equality filtering applied
//! uniformly, without re-implementing the logic or committing to a fixed
//! set of sortable/filterable fields at compile time.

pub mod filter;
pub mod paginate;
pub mod request;
pub mod sort;

pub use filter::{FilterMap, compile_filter, parse_filter};
pub use paginate::{run_paged, verify};
pub use request::{PageLimits, PageQuery, PagedResult, QueryArgs};
pub use sort::{SortSpec, apply_sort, resolve_sort};
