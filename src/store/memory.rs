//! In-memory record store for testing and development

use crate::core::record::Record;
use crate::query::sort::{SortSpec, apply_sort};
use crate::store::{QuerySet, RecordPredicate, RecordSet};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Keeps records in insertion order, which is the backing order that
/// equal sort keys preserve. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Insert a single record
    pub fn insert(&self, record: T) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.push(record);

        Ok(())
    }

    /// Insert a batch of records
    pub fn insert_many(&self, batch: impl IntoIterator<Item = T>) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.extend(batch);

        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Start a lazy query over the current contents.
    ///
    /// The returned sequence holds a handle to the live store; it reads
    /// the data only when counted or windowed.
    pub fn query(&self) -> QuerySet<T> {
        Box::new(InMemorySet {
            records: self.records.clone(),
            predicates: Vec::new(),
            sort: None,
        })
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A lazy pipeline over an [`InMemoryStore`]
pub struct InMemorySet<T> {
    records: Arc<RwLock<Vec<T>>>,
    predicates: Vec<RecordPredicate<T>>,
    sort: Option<SortSpec>,
}

impl<T: Record> InMemorySet<T> {
    fn matching(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records
            .iter()
            .filter(|record| self.predicates.iter().all(|p| p(record)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<T: Record> RecordSet<T> for InMemorySet<T> {
    fn filtered(mut self: Box<Self>, predicate: RecordPredicate<T>) -> QuerySet<T> {
        self.predicates.push(predicate);
        self
    }

    fn ordered(mut self: Box<Self>, sort: SortSpec) -> QuerySet<T> {
        self.sort = Some(sort);
        self
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.matching()?.len() as u64)
    }

    async fn window(&self, skip: usize, take: usize) -> Result<Vec<T>> {
        let mut rows = self.matching()?;
        if let Some(sort) = &self.sort {
            apply_sort(&mut rows, sort);
        }
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }
}
