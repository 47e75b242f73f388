//! # cellar
//!
//! A wine-cellar inventory API built around a generic paging, sorting
//! and filtering engine.
//!
//! Any GET endpoint returning a collection can opt into uniform
//! pagination at registration time: the endpoint supplies a producer
//! yielding a lazy record sequence, and the engine handles `page`,
//! `pageSize`, `sortField`, `sortDirection` and `filter` parameters,
//! returning an `{"items": [...], "totalCount": n}` envelope.
//!
//! ## Example
//!
//! ```ignore
//! use axum::Router;
//! use cellar::prelude::*;
//!
//! #[derive(Clone)]
//! struct AppState {
//!     users: InMemoryStore<UserSummary>,
//! }
//!
//! let state = AppState { users: InMemoryStore::new() };
//! let routes = Router::new()
//!     .route("/users", paged_get(|state: AppState, _args| async move {
//!         Ok(state.users.query())
//!     }))
//!     .with_state(state);
//!
//! ServerBuilder::new()
//!     .with_record::<UserSummary>()?
//!     .with_routes(routes)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod query;
pub mod records;
pub mod server;
pub mod store;

pub use crate::config::{CellarConfig, PagingConfig, ServerConfig};
pub use crate::core::error::{PagingError, PagingResult};
pub use crate::core::field::{FieldKind, FieldValue};
pub use crate::core::record::{DefaultSort, FieldRegistry, Record, SortDirection};
pub use crate::query::request::{PageLimits, PageQuery, PagedResult, QueryArgs};
pub use crate::server::{ServerBuilder, init_tracing, paged_get, paged_get_with};
pub use crate::store::memory::InMemoryStore;
pub use crate::store::{QuerySet, RecordPredicate, RecordSet};

/// Convenience imports for application code
pub mod prelude {
    pub use crate::config::CellarConfig;
    pub use crate::core::error::{PagingError, PagingResult};
    pub use crate::core::field::{FieldKind, FieldValue};
    pub use crate::core::record::{Record, SortDirection};
    pub use crate::impl_record;
    pub use crate::query::request::{PageLimits, PagedResult, QueryArgs};
    pub use crate::records::{Bottle, StorageBin, UserSummary, Wine};
    pub use crate::server::{ServerBuilder, paged_get, paged_get_with};
    pub use crate::store::memory::InMemoryStore;
    pub use crate::store::QuerySet;
}
