//! Field projection.

use crate::types::Record;

use super::{OpKind, Operator};

/// Keep only the listed fields of every record, in the listed order.
///
/// A field a record does not have is silently skipped for that record —
/// projection never introduces a field. Duplicate names in `fields` collapse
/// to their first occurrence.
pub fn select<I, S>(fields: I) -> Operator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut deduped: Vec<String> = Vec::new();
    for field in fields {
        let field = field.into();
        if !deduped.contains(&field) {
            deduped.push(field);
        }
    }

    Operator {
        kind: OpKind::Select { fields: deduped },
    }
}

pub(crate) fn apply(fields: &[String], collection: Vec<Record>) -> Vec<Record> {
    collection
        .into_iter()
        .map(|record| {
            let mut projected = Record::new();
            for field in fields {
                if let Some(value) = record.get(field) {
                    projected.insert(field.clone(), value.clone());
                }
            }
            projected
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::select;
    use crate::pipeline::query;
    use crate::types::{Record, Value};

    #[test]
    fn select_keeps_only_listed_fields_in_call_order() {
        let input = vec![Record::from_pairs([("a", 1), ("b", 2), ("c", 3)])];
        let out = query(&input, &[select(["c", "a"])]);

        assert_eq!(out, vec![Record::from_pairs([("c", 3), ("a", 1)])]);
        let names: Vec<&str> = out[0].field_names().collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn select_skips_fields_a_record_does_not_have() {
        let input = vec![
            Record::from_pairs([("a", 1), ("b", 2)]),
            Record::from_pairs([("b", 3)]),
        ];
        let out = query(&input, &[select(["a"])]);

        assert_eq!(out[0], Record::from_pairs([("a", 1)]));
        assert!(out[1].is_empty());
    }

    #[test]
    fn select_of_absent_field_yields_empty_records() {
        let input = vec![Record::from_pairs([("a", 1), ("b", 2)])];
        let out = query(&input, &[select(["c"])]);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty());
    }

    #[test]
    fn duplicate_field_names_collapse() {
        let input = vec![Record::from_pairs([("a", Value::from(1))])];
        let out = query(&input, &[select(["a", "a"])]);
        assert_eq!(out[0].len(), 1);
        assert_eq!(out[0].get("a"), Some(&Value::Int(1)));
    }
}
