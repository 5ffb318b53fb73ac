//! Collection ordering.

use std::cmp::Ordering;

use crate::types::Record;

use super::{OpKind, Operator};

/// Sort direction for [`sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// Sort records by `property` using the total order of
/// [`Value::total_cmp`](crate::Value::total_cmp).
///
/// The sort is stable: records that compare equal — including records that
/// lack the property entirely — keep their relative input order.
pub fn sort_by(property: impl Into<String>, order: SortOrder) -> Operator {
    Operator {
        kind: OpKind::SortBy {
            property: property.into(),
            order,
        },
    }
}

pub(crate) fn apply(property: &str, order: SortOrder, mut collection: Vec<Record>) -> Vec<Record> {
    // Vec::sort_by is stable, which the equal-key guarantee relies on.
    collection.sort_by(|left, right| {
        let ordering = match (left.get(property), right.get(property)) {
            (Some(a), Some(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    collection
}

#[cfg(test)]
mod tests {
    use super::{sort_by, SortOrder};
    use crate::pipeline::query;
    use crate::types::Record;

    fn rec(a: i64) -> Record {
        Record::from_pairs([("a", a)])
    }

    #[test]
    fn sort_ascending_and_descending() {
        let input = vec![rec(3), rec(1), rec(2)];
        assert_eq!(
            query(&input, &[sort_by("a", SortOrder::Ascending)]),
            vec![rec(1), rec(2), rec(3)]
        );
        assert_eq!(
            query(&input, &[sort_by("a", SortOrder::Descending)]),
            vec![rec(3), rec(2), rec(1)]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let input = vec![
            Record::from_pairs([("a", 1), ("tag", 10)]),
            Record::from_pairs([("a", 2), ("tag", 20)]),
            Record::from_pairs([("a", 1), ("tag", 30)]),
        ];
        let out = query(&input, &[sort_by("a", SortOrder::Ascending)]);
        assert_eq!(out[0], input[0]);
        assert_eq!(out[1], input[2]);
        assert_eq!(out[2], input[1]);
    }

    #[test]
    fn records_lacking_the_property_keep_their_position_relative_order() {
        let input = vec![Record::from_pairs([("b", 1)]), rec(2), Record::from_pairs([("b", 2)])];
        let out = query(&input, &[sort_by("a", SortOrder::Ascending)]);
        // Missing keys compare equal to everything, so a stable sort leaves
        // this particular input untouched.
        assert_eq!(out, input);
    }

    #[test]
    fn sorts_strings_lexicographically() {
        let input = vec![
            Record::from_pairs([("name", "Grace")]),
            Record::from_pairs([("name", "Ada")]),
        ];
        let out = query(&input, &[sort_by("name", SortOrder::Ascending)]);
        assert_eq!(out[0], Record::from_pairs([("name", "Ada")]));
    }

    #[test]
    fn sorts_mixed_int_and_float_numerically() {
        let input = vec![
            Record::from_pairs([("a", 1.5)]),
            Record::from_pairs([("a", 1)]),
            Record::from_pairs([("a", 2)]),
        ];
        let out = query(&input, &[sort_by("a", SortOrder::Ascending)]);
        assert_eq!(out[0], Record::from_pairs([("a", 1)]));
        assert_eq!(out[1], Record::from_pairs([("a", 1.5)]));
        assert_eq!(out[2], Record::from_pairs([("a", 2)]));
    }
}
