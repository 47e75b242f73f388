//! Filter compilation
//!
//! Turns the untyped `filter` blob (a JSON object of field name to
//! scalar) into a single equality predicate over a record type. Only
//! equality composition is supported; range, prefix and negation
//! operators are an explicit scope boundary, not an oversight.

use crate::core::error::{PagingError, PagingResult};
use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::store::RecordPredicate;
use serde_json::Value;
use std::sync::Arc;

/// An untyped field-name to scalar mapping supplied by the caller
pub type FilterMap = serde_json::Map<String, Value>;

/// Parse the raw `filter` query parameter into a [`FilterMap`].
///
/// Absent or blank means no filtering. Anything that is not a JSON
/// object is a client error.
pub fn parse_filter(raw: Option<&str>) -> PagingResult<FilterMap> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(FilterMap::new());
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PagingError::MalformedFilter {
            message: format!("expected a JSON object, got {}", kind_of(&other)),
        }),
        Err(err) => Err(PagingError::MalformedFilter {
            message: err.to_string(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Compile a filter map into a conjunction of equality tests.
///
/// Unrecognized keys are skipped with a warning rather than rejected,
/// so a misspelled key silently matches everything; this preserves the
/// documented contract with existing clients. A recognized key whose
/// value cannot be coerced to the field's native type is a
/// [`PagingError::FilterValue`] client error. Zero terms yields the
/// identity predicate.
pub fn compile_filter<T: Record>(map: &FilterMap) -> PagingResult<RecordPredicate<T>> {
    let mut terms: Vec<(fn(&T) -> FieldValue, FieldValue)> = Vec::new();

    for (key, raw) in map {
        let Some(def) = T::fields().resolve(key) else {
            tracing::warn!(
                resource = T::resource_name(),
                field = %key,
                "ignoring unrecognized filter field"
            );
            continue;
        };

        let wanted = def
            .kind
            .coerce(raw)
            .ok_or_else(|| PagingError::FilterValue {
                field: def.name.to_string(),
                value: raw.clone(),
            })?;
        terms.push((def.accessor, wanted));
    }

    Ok(Arc::new(move |record: &T| {
        terms
            .iter()
            .all(|(accessor, wanted)| accessor(record) == *wanted)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::user::UserSummary;

    fn user(id: i64, username: &str, is_admin: bool) -> UserSummary {
        UserSummary {
            id,
            username: username.to_string(),
            last_on: None,
            is_admin,
        }
    }

    #[test]
    fn test_parse_absent_filter_is_empty() {
        assert!(parse_filter(None).expect("should parse").is_empty());
        assert!(parse_filter(Some("  ")).expect("should parse").is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_filter(Some("[1, 2]")).expect_err("should reject");
        assert!(matches!(err, PagingError::MalformedFilter { .. }));
        assert!(err.to_string().contains("array"));

        let err = parse_filter(Some("not json at all {")).expect_err("should reject");
        assert!(matches!(err, PagingError::MalformedFilter { .. }));
    }

    #[test]
    fn test_empty_map_matches_everything() {
        let predicate =
            compile_filter::<UserSummary>(&FilterMap::new()).expect("should compile");
        assert!(predicate(&user(1, "alice", false)));
        assert!(predicate(&user(2, "bob", true)));
    }

    #[test]
    fn test_equality_term() {
        let map = parse_filter(Some(r#"{"username": "alice"}"#)).expect("should parse");
        let predicate = compile_filter::<UserSummary>(&map).expect("should compile");
        assert!(predicate(&user(1, "alice", false)));
        assert!(!predicate(&user(2, "alicia", false)));
    }

    #[test]
    fn test_terms_are_conjoined() {
        let map =
            parse_filter(Some(r#"{"username": "alice", "isAdmin": true}"#)).expect("should parse");
        let predicate = compile_filter::<UserSummary>(&map).expect("should compile");
        assert!(predicate(&user(1, "alice", true)));
        assert!(!predicate(&user(2, "alice", false)));
        assert!(!predicate(&user(3, "bob", true)));
    }

    #[test]
    fn test_key_casing_is_irrelevant() {
        let map = parse_filter(Some(r#"{"is_admin": true}"#)).expect("should parse");
        let predicate = compile_filter::<UserSummary>(&map).expect("should compile");
        assert!(predicate(&user(1, "alice", true)));
        assert!(!predicate(&user(2, "bob", false)));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        // "usernme" is a typo; the term is dropped and everything matches
        let map = parse_filter(Some(r#"{"usernme": "alice"}"#)).expect("should parse");
        let predicate = compile_filter::<UserSummary>(&map).expect("should compile");
        assert!(predicate(&user(1, "bob", false)));
    }

    #[test]
    fn test_incoercible_value_is_an_error() {
        let map = parse_filter(Some(r#"{"isAdmin": "maybe"}"#)).expect("should parse");
        let Err(err) = compile_filter::<UserSummary>(&map) else {
            panic!("incoercible value should be rejected");
        };
        match err {
            PagingError::FilterValue { field, value } => {
                assert_eq!(field, "isAdmin");
                assert_eq!(value, serde_json::json!("maybe"));
            }
            other => panic!("expected FilterValue, got {other:?}"),
        }
    }

    #[test]
    fn test_string_spelling_of_boolean_coerces() {
        let map = parse_filter(Some(r#"{"isAdmin": "true"}"#)).expect("should parse");
        let predicate = compile_filter::<UserSummary>(&map).expect("should compile");
        assert!(predicate(&user(1, "alice", true)));
        assert!(!predicate(&user(2, "bob", false)));
    }
}
