//! Membership filtering.

use crate::set;
use crate::types::{Record, Value};

use super::{OpKind, Operator};

/// Keep records whose `property` is present and whose value is one of
/// `values`.
///
/// A record without the property is excluded — absence is a normal filtering
/// outcome, not an error. The output is structurally deduplicated: a record
/// appears at most once even if the input contained equal copies.
pub fn filter_in<I, V>(property: impl Into<String>, values: I) -> Operator
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Operator {
        kind: OpKind::FilterIn {
            property: property.into(),
            values: values.into_iter().map(Into::into).collect(),
        },
    }
}

pub(crate) fn apply(property: &str, values: &[Value], collection: Vec<Record>) -> Vec<Record> {
    let mut filtered: Vec<Record> = Vec::new();
    for record in collection {
        let matches = record
            .get(property)
            .is_some_and(|value| values.contains(value));
        if matches && !set::contains(&record, &filtered) {
            filtered.push(record);
        }
    }
    filtered
}
