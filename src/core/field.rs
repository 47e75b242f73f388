//! Field value types and coercion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Total ordering across field values.
    ///
    /// Same-variant values compare by their natural order (floats via
    /// `total_cmp`, so NaN is ordered rather than poisoning the sort).
    /// Null sorts before everything else; remaining cross-variant pairs
    /// fall back to a fixed variant rank so sorting never panics on
    /// heterogeneous data.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) => 2,
            FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::Uuid(_) => 4,
            FieldValue::DateTime(_) => 5,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<Uuid> for FieldValue {
    fn from(v: Uuid) -> Self {
        FieldValue::Uuid(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::DateTime(v)
    }
}

impl<V> From<Option<V>> for FieldValue
where
    V: Into<FieldValue>,
{
    fn from(v: Option<V>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// The declared native type of a record field.
///
/// Used to coerce raw filter scalars from their transport representation
/// (loosely-typed JSON) into the field's native [`FieldValue`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Uuid,
    DateTime,
}

impl FieldKind {
    /// Coerce a raw JSON scalar into this kind's native value.
    ///
    /// Returns `None` when the scalar cannot represent the native type
    /// (e.g. `"abc"` for an Integer field). JSON null coerces to
    /// [`FieldValue::Null`] for every kind so callers can match unset
    /// optional fields. Query strings carry everything as strings, so
    /// numeric and boolean kinds also accept their string spellings.
    pub fn coerce(&self, raw: &Value) -> Option<FieldValue> {
        match (self, raw) {
            (_, Value::Null) => Some(FieldValue::Null),
            (FieldKind::Text, Value::String(s)) => Some(FieldValue::String(s.clone())),
            (FieldKind::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
            (FieldKind::Integer, Value::String(s)) => {
                s.trim().parse().ok().map(FieldValue::Integer)
            }
            (FieldKind::Float, Value::Number(n)) => n.as_f64().map(FieldValue::Float),
            (FieldKind::Float, Value::String(s)) => s.trim().parse().ok().map(FieldValue::Float),
            (FieldKind::Boolean, Value::Bool(b)) => Some(FieldValue::Boolean(*b)),
            (FieldKind::Boolean, Value::String(s)) => match s.to_ascii_lowercase().as_str() {
                "true" => Some(FieldValue::Boolean(true)),
                "false" => Some(FieldValue::Boolean(false)),
                _ => None,
            },
            (FieldKind::Uuid, Value::String(s)) => Uuid::parse_str(s).ok().map(FieldValue::Uuid),
            (FieldKind::DateTime, Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| FieldValue::DateTime(d.with_timezone(&Utc))),
            _ => None,
        }
    }
}
