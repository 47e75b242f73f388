//! Sort resolution and application
//!
//! Exactly one sort applies per query. Resolution order: an explicit
//! field that resolves on the record type wins; an explicit
//! field that does not resolve falls back to the type's default (never a
//! client error); no explicit field means the type default. A default
//! that itself does not resolve is a configuration error, because it
//! means the type was wired into the paginated path without being
//! designed for it.

use crate::core::error::{PagingError, PagingResult};
use crate::core::record::{Record, SortDirection, normalize_field_name};

/// A resolved single-key sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Normalized field name, guaranteed to resolve on the record type
    pub field: String,
    pub direction: SortDirection,
}

/// Resolve the sort to apply for a request.
pub fn resolve_sort<T: Record>(
    explicit: Option<&str>,
    direction: SortDirection,
) -> PagingResult<SortSpec> {
    if let Some(name) = explicit {
        if T::fields().resolve(name).is_some() {
            return Ok(SortSpec {
                field: normalize_field_name(name),
                direction,
            });
        }
        tracing::debug!(
            resource = T::resource_name(),
            field = %name,
            "unknown sort field, falling back to default sort"
        );
    }

    let default = T::default_sort();
    if T::fields().resolve(default.field).is_none() {
        return Err(PagingError::Configuration {
            resource: T::resource_name(),
            message: format!(
                "default sort field '{}' is not registered",
                default.field
            ),
        });
    }

    // The default keeps its declared direction; an explicit direction
    // only rides along with an explicit, resolvable field.
    Ok(SortSpec {
        field: normalize_field_name(default.field),
        direction: default.direction,
    })
}

/// Stable in-place sort of records by a resolved field.
///
/// Ties keep their original relative order, so repeated requests over an
/// unchanged backing sequence paginate deterministically.
pub fn apply_sort<T: Record>(records: &mut [T], spec: &SortSpec) {
    let Some(def) = T::fields().resolve(&spec.field) else {
        // SortSpecs are only built from resolved fields; nothing to do.
        return;
    };
    let accessor = def.accessor;
    records.sort_by(|a, b| {
        let ordering = accessor(a).compare(&accessor(b));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
