//! Set operations over sequences of [`Record`]s.
//!
//! All operations use structural record equality (`Record: PartialEq`) and
//! preserve input order. They are O(n²) linear-scan folds, which is fine for
//! the in-memory collection sizes this crate targets.

use crate::types::Record;

/// True iff any element of `items` is structurally equal to `item`.
pub(crate) fn contains(item: &Record, items: &[Record]) -> bool {
    items.iter().any(|other| other == item)
}

/// Keep only the first occurrence of each structurally-equal group.
pub fn distinct(items: &[Record]) -> Vec<Record> {
    let mut out: Vec<Record> = Vec::with_capacity(items.len());
    for item in items {
        if !contains(item, &out) {
            out.push(item.clone());
        }
    }
    out
}

/// Keep one representative of every record that appears more than once.
///
/// A record survives only if some *other* element (at a different position)
/// is structurally equal to it; records with no duplicate are dropped. The
/// result itself contains no duplicates.
pub fn repetitions(items: &[Record]) -> Vec<Record> {
    let mut out: Vec<Record> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let duplicated = items
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other == item);
        if duplicated && !contains(item, &out) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{contains, distinct, repetitions};
    use crate::types::Record;

    fn rec(a: i64) -> Record {
        Record::from_pairs([("a", a)])
    }

    #[test]
    fn contains_uses_structural_equality() {
        let items = vec![
            Record::from_pairs([("a", 1), ("b", 2)]),
            Record::from_pairs([("a", 3), ("b", 4)]),
        ];
        // Field order does not matter.
        assert!(contains(&Record::from_pairs([("b", 2), ("a", 1)]), &items));
        assert!(!contains(&Record::from_pairs([("a", 1)]), &items));
    }

    #[test]
    fn distinct_keeps_first_occurrence_in_order() {
        let items = vec![rec(1), rec(2), rec(1), rec(3), rec(2)];
        assert_eq!(distinct(&items), vec![rec(1), rec(2), rec(3)]);
    }

    #[test]
    fn distinct_of_unique_items_is_identity() {
        let items = vec![rec(1), rec(2), rec(3)];
        assert_eq!(distinct(&items), items);
    }

    #[test]
    fn repetitions_keeps_only_duplicated_records_once() {
        let items = vec![rec(1), rec(2), rec(1), rec(3), rec(1), rec(2)];
        assert_eq!(repetitions(&items), vec![rec(1), rec(2)]);
    }

    #[test]
    fn repetitions_drops_singletons_and_excludes_self_match() {
        let items = vec![rec(1), rec(2), rec(3)];
        assert!(repetitions(&items).is_empty());
        assert!(repetitions(&[]).is_empty());
    }
}
