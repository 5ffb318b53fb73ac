//! Core data model: scalar [`Value`]s and field-ordered [`Record`]s.
//!
//! A [`Record`] is an insertion-ordered mapping from field name to scalar
//! [`Value`]. Records have no identity beyond their contents: equality is
//! structural (same field set, same values), independent of field order.
//! A collection is simply a `Vec<Record>`.
//!
//! Absence is data: a record that lacks a field is a normal state, expressed
//! by the key being missing rather than by a null value.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// A single scalar field value.
///
/// Serialized untagged, so records round-trip as plain JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    Str(String),
}

impl Value {
    /// Total order used by sorting.
    ///
    /// Same-variant values compare naturally; `Int` and `Float` compare
    /// numerically with each other. Values of different kinds order by kind:
    /// booleans, then numbers, then strings.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Str(a), Str(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Str(_) => 2,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = QueryError;

    /// Converts a scalar JSON value.
    ///
    /// JSON `null`, arrays and objects have no scalar representation and are
    /// rejected as a shape mismatch.
    fn try_from(v: &serde_json::Value) -> QueryResult<Self> {
        match v {
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(QueryError::ShapeMismatch {
                        message: format!("number {n} is not representable"),
                    })
                }
            }
            serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
            other => Err(QueryError::ShapeMismatch {
                message: format!("expected a scalar, got {other}"),
            }),
        }
    }
}

/// An insertion-ordered mapping from field name to [`Value`].
///
/// Field order is preserved for presentation (projection and reformatting
/// keep it meaningful), but it does not participate in equality: two records
/// are equal iff they have the same field set and equal values per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, value)` pairs, preserving pair order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a field, appending it if absent.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Mutable access to a field's value, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<&serde_json::Value> for Record {
    type Error = QueryError;

    /// Converts a flat JSON object into a record.
    ///
    /// Fields keep the object's order. A field with JSON `null` is omitted
    /// (absence is data, not a null value). Nested arrays/objects are a
    /// shape mismatch.
    fn try_from(v: &serde_json::Value) -> QueryResult<Self> {
        let obj = v.as_object().ok_or_else(|| QueryError::ShapeMismatch {
            message: format!("expected a json object, got {v}"),
        })?;

        let mut record = Record::new();
        for (name, jv) in obj {
            if jv.is_null() {
                continue;
            }
            record.insert(name.clone(), Value::try_from(jv)?);
        }
        Ok(record)
    }
}

/// Parse a JSON array of flat objects into a collection of records.
///
/// ```rust
/// use recordpipe::records_from_json;
///
/// let people = records_from_json(
///     r#"[{"name":"Ada","age":41},{"name":"Grace","age":36}]"#,
/// ).unwrap();
/// assert_eq!(people.len(), 2);
/// ```
pub fn records_from_json(input: &str) -> QueryResult<Vec<Record>> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    let items = parsed.as_array().ok_or_else(|| QueryError::ShapeMismatch {
        message: "expected a json array of objects".to_string(),
    })?;

    items.iter().map(Record::try_from).collect()
}
