//! Per-field value rewriting.

use crate::types::{Record, Value};

use super::{OpKind, Operator};

/// Replace `property`'s value with `formatter(value)` in every record that
/// has the property; all other fields are untouched and keep their order.
///
/// The formatter runs exactly once per matching record and there is no
/// idempotence guarantee: formatting twice in one pipeline transforms twice.
/// A panic inside the formatter propagates to the [`crate::query`] caller.
pub fn format<F>(property: impl Into<String>, formatter: F) -> Operator
where
    F: Fn(&Value) -> Value + 'static,
{
    Operator {
        kind: OpKind::Format {
            property: property.into(),
            formatter: Box::new(formatter),
        },
    }
}

pub(crate) fn apply(
    property: &str,
    formatter: &dyn Fn(&Value) -> Value,
    mut collection: Vec<Record>,
) -> Vec<Record> {
    for record in &mut collection {
        if let Some(value) = record.get_mut(property) {
            *value = formatter(value);
        }
    }
    collection
}

#[cfg(test)]
mod tests {
    use super::format;
    use crate::pipeline::query;
    use crate::types::{Record, Value};

    fn upper(value: &Value) -> Value {
        match value {
            Value::Str(s) => Value::Str(s.to_uppercase()),
            other => other.clone(),
        }
    }

    #[test]
    fn format_rewrites_only_the_target_field() {
        let input = vec![Record::from_pairs([
            ("name", Value::from("ada")),
            ("age", Value::from(41)),
        ])];
        let out = query(&input, &[format("name", upper)]);
        assert_eq!(
            out,
            vec![Record::from_pairs([
                ("name", Value::from("ADA")),
                ("age", Value::from(41)),
            ])]
        );
        // Key order unchanged.
        let names: Vec<&str> = out[0].field_names().collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn format_skips_records_lacking_the_property() {
        let input = vec![Record::from_pairs([("age", 41)])];
        let out = query(&input, &[format("name", upper)]);
        assert_eq!(out, input);
    }

    #[test]
    fn identity_formatter_leaves_records_unchanged() {
        let input = vec![
            Record::from_pairs([("a", Value::from(1)), ("b", Value::from("x"))]),
            Record::from_pairs([("a", Value::from(2.5))]),
        ];
        let out = query(&input, &[format("a", |v| v.clone())]);
        assert_eq!(out, input);
    }

    #[test]
    fn formatting_twice_transforms_twice() {
        let double = |v: &Value| match v {
            Value::Int(n) => Value::Int(n * 2),
            other => other.clone(),
        };
        let input = vec![Record::from_pairs([("a", 1)])];
        let out = query(&input, &[format("a", double), format("a", double)]);
        assert_eq!(out, vec![Record::from_pairs([("a", 4)])]);
    }
}
