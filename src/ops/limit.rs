//! Result truncation.

use crate::types::Record;

use super::{OpKind, Operator};

/// Keep only the first `count` records.
///
/// `count` larger than the collection is a no-op; `limit(0)` empties it.
/// Negative counts are unrepresentable by construction.
pub fn limit(count: usize) -> Operator {
    Operator {
        kind: OpKind::Limit { count },
    }
}

pub(crate) fn apply(count: usize, mut collection: Vec<Record>) -> Vec<Record> {
    collection.truncate(count);
    collection
}
