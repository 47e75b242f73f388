//! Core module containing fundamental traits and types for the engine

pub mod error;
pub mod field;
pub mod record;

pub use error::{ErrorBody, PagingError, PagingResult};
pub use field::{FieldKind, FieldValue};
pub use record::{DefaultSort, FieldDef, FieldRegistry, Record, SortDirection};
