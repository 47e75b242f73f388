//! Store traits for lazy record sequences
//!
//! The engine consumes the data layer only as a "queryable sequence":
//! a lazily-evaluated ordered collection supporting filter, sort, count
//! and slice without fetching all records upfront. Backends implement
//! [`RecordSet`]; the crate ships an in-memory backend in
//! [`memory`] for development and tests.

pub mod memory;

use crate::core::record::Record;
use crate::query::sort::SortSpec;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A composable predicate over records
pub type RecordPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A boxed lazy record sequence
pub type QuerySet<T> = Box<dyn RecordSet<T>>;

/// A lazily-evaluated ordered sequence of records.
///
/// `filtered` and `ordered` compose the pipeline without evaluating it;
/// nothing touches the backing data until `count` or `window` runs.
/// Both reads observe the same filtered pipeline, so a count followed by
/// a window sees the same logical view (modulo concurrent writes to the
/// backing store, which this path does not guard against).
#[async_trait]
pub trait RecordSet<T: Record>: Send + Sync {
    /// Narrow the sequence to records matching the predicate
    fn filtered(self: Box<Self>, predicate: RecordPredicate<T>) -> QuerySet<T>;

    /// Order the sequence by a resolved sort; replaces any earlier sort
    fn ordered(self: Box<Self>, sort: SortSpec) -> QuerySet<T>;

    /// Count the records the pipeline currently matches
    async fn count(&self) -> Result<u64>;

    /// Materialize one window of the (filtered, sorted) sequence
    async fn window(&self, skip: usize, take: usize) -> Result<Vec<T>>;
}
