//! Boolean combination of filters.
//!
//! [`or`] and [`and`] accept only filter-shaped operators (those that keep a
//! subset of their input: [`crate::filter_in`] and other combinators).
//! Passing anything else is a configuration error rejected at construction,
//! before any pipeline runs.
//!
//! `and` is sequential narrowing: it applies its filters one after another,
//! each over the previous result. This is associative and unambiguous, which
//! the alternate "flatten all outputs, keep cross-filter duplicates" join is
//! not once filters produce internal duplicates or more than two filters are
//! combined. That join remains available to callers via
//! [`crate::set::repetitions`].

use crate::error::{QueryError, QueryResult};
use crate::set;
use crate::types::Record;

use super::{OpKind, Operator};

/// Union of filters: keep a record if any constituent filter produces it.
///
/// Output follows the input collection's order and contains each record at
/// most once. With zero filters nothing matches, so the result is empty.
pub fn or<I>(filters: I) -> QueryResult<Operator>
where
    I: IntoIterator<Item = Operator>,
{
    Ok(Operator {
        kind: OpKind::Or {
            filters: filters_only("or", filters)?,
        },
    })
}

/// Intersection of filters: apply each filter in turn, narrowing the result.
///
/// With zero filters the input passes through unchanged.
pub fn and<I>(filters: I) -> QueryResult<Operator>
where
    I: IntoIterator<Item = Operator>,
{
    Ok(Operator {
        kind: OpKind::And {
            filters: filters_only("and", filters)?,
        },
    })
}

fn filters_only<I>(combinator: &'static str, operators: I) -> QueryResult<Vec<Operator>>
where
    I: IntoIterator<Item = Operator>,
{
    let operators: Vec<Operator> = operators.into_iter().collect();
    for op in &operators {
        if !op.is_filter() {
            return Err(QueryError::NotAFilter {
                combinator,
                found: op.name(),
            });
        }
    }
    Ok(operators)
}

pub(crate) fn apply_or(filters: &[Operator], collection: Vec<Record>) -> Vec<Record> {
    let mut matched: Vec<Record> = Vec::new();
    for filter in filters {
        for record in filter.apply(collection.clone()) {
            if !set::contains(&record, &matched) {
                matched.push(record);
            }
        }
    }

    // Re-walk the input so output order follows the collection, not the
    // filters, and equal records collapse to one.
    let mut out: Vec<Record> = Vec::new();
    for record in collection {
        if set::contains(&record, &matched) && !set::contains(&record, &out) {
            out.push(record);
        }
    }
    out
}

pub(crate) fn apply_and(filters: &[Operator], collection: Vec<Record>) -> Vec<Record> {
    filters
        .iter()
        .fold(collection, |current, filter| filter.apply(current))
}
