//! Record traits defining the core abstraction for paginatable types
//!
//! Every type returned through the paginated path implements [`Record`]:
//! a static resource name, a cached [`FieldRegistry`] mapping normalized
//! field names to typed accessors, and a declared default sort. The
//! registry replaces runtime reflection: it is built once per type and
//! centralizes the case-insensitivity rule for external field names.

use crate::core::field::{FieldKind, FieldValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for a single-key sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a transport-level direction string.
    ///
    /// `desc` (any casing) means descending; everything else, including
    /// an empty string, means ascending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Per-type static declaration of the field used when a caller
/// specifies no explicit sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSort {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Normalize a field name for registry lookup.
///
/// Lowercases and strips underscores, so `isAdmin`, `is_admin` and
/// `ISADMIN` all resolve to the same key regardless of the caller's
/// naming convention.
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single field's metadata: wire name, native kind and read accessor
pub struct FieldDef<T> {
    /// The field name as it appears on the wire (camelCase)
    pub name: &'static str,
    /// The field's native type, used for filter value coercion
    pub kind: FieldKind,
    /// Read accessor producing the field's current value
    pub accessor: fn(&T) -> FieldValue,
}

impl<T> Clone for FieldDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDef<T> {}

impl<T> fmt::Debug for FieldDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Registry of a record type's fields, keyed by normalized name.
///
/// Built once per type (cached behind a `OnceLock` by the `impl_record!`
/// macro) and iterated in declaration order.
#[derive(Debug)]
pub struct FieldRegistry<T> {
    fields: IndexMap<String, FieldDef<T>>,
}

impl<T> FieldRegistry<T> {
    /// Start building a registry
    pub fn builder() -> FieldRegistryBuilder<T> {
        FieldRegistryBuilder {
            fields: IndexMap::new(),
        }
    }

    /// Resolve a field by name, case-insensitively and independent of
    /// the caller's casing convention
    pub fn resolve(&self, name: &str) -> Option<&FieldDef<T>> {
        self.fields.get(&normalize_field_name(name))
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef<T>> {
        self.fields.values()
    }
}

/// Builder for [`FieldRegistry`]
pub struct FieldRegistryBuilder<T> {
    fields: IndexMap<String, FieldDef<T>>,
}

impl<T> FieldRegistryBuilder<T> {
    /// Register a field under its wire name
    pub fn field(mut self, name: &'static str, kind: FieldKind, accessor: fn(&T) -> FieldValue) -> Self {
        self.fields.insert(
            normalize_field_name(name),
            FieldDef {
                name,
                kind,
                accessor,
            },
        );
        self
    }

    pub fn build(self) -> FieldRegistry<T> {
        FieldRegistry {
            fields: self.fields,
        }
    }
}

/// Base trait for all record types that can flow through the paginated path.
///
/// Implementations are normally generated by the `impl_record!` macro.
/// Every record type wired into a paginated route must declare a default
/// sort whose field exists in its registry; that contract is checked by
/// `query::verify` at integration time, not per request.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "wines", "users")
    fn resource_name() -> &'static str;

    /// The type's field registry, built once and cached
    fn fields() -> &'static FieldRegistry<Self>;

    /// The declared default sort field and direction
    fn default_sort() -> DefaultSort;
}
