//! Built-in cellar record types
//!
//! Each type implements [`Record`](crate::core::record::Record) via the
//! [`impl_record!`](crate::impl_record) macro, declaring its wire fields
//! and default sort in one place.

pub mod macros;

pub mod bottle;
pub mod storage;
pub mod user;
pub mod wine;

pub use bottle::Bottle;
pub use storage::StorageBin;
pub use user::UserSummary;
pub use wine::Wine;
