//! Result normalization.
//!
//! A single-column result collapses into a flat list of that column's
//! values. Anything else is kept as a list of row maps.

use super::model::{NormalizedValue, ResultSet};

/// Normalize a result set using the key set of its first row.
pub fn normalize(rows: ResultSet) -> NormalizedValue {
    let single_key = match rows.first() {
        Some(first) if first.len() == 1 => first.keys().next().cloned(),
        _ => None,
    };

    match single_key {
        Some(key) => NormalizedValue::Values(
            rows.into_iter()
                .map(|mut row| row.remove(&key).unwrap_or(serde_json::Value::Null))
                .collect(),
        ),
        None => NormalizedValue::Rows(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::model::Record;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_single_column_flattens() {
        let rows = vec![record(json!({"name": "Ron Howard"}))];
        assert_eq!(normalize(rows), NormalizedValue::Values(vec![json!("Ron Howard")]));
    }

    #[test]
    fn test_single_column_keeps_order_and_length() {
        let rows = vec![
            record(json!({"title": "Apollo 13"})),
            record(json!({"title": "Cast Away"})),
            record(json!({"title": "The Green Mile"})),
        ];
        let normalized = normalize(rows);
        assert_eq!(
            normalized,
            NormalizedValue::Values(vec![
                json!("Apollo 13"),
                json!("Cast Away"),
                json!("The Green Mile"),
            ])
        );
        assert_eq!(normalized.len(), 3);
    }

    #[test]
    fn test_single_column_nested_values_pass_through() {
        let rows = vec![
            record(json!({"titles": ["A", "B"]})),
            record(json!({"titles": 1999})),
        ];
        assert_eq!(
            normalize(rows),
            NormalizedValue::Values(vec![json!(["A", "B"]), json!(1999)])
        );
    }

    #[test]
    fn test_multi_column_unchanged() {
        let rows = vec![
            record(json!({"title": "Apollo 13", "released": 1995})),
            record(json!({"title": "Cast Away", "released": 2000})),
        ];
        assert_eq!(normalize(rows.clone()), NormalizedValue::Rows(rows));
    }

    #[test]
    fn test_empty_result_is_rows() {
        let normalized = normalize(Vec::new());
        assert_eq!(normalized, NormalizedValue::Rows(Vec::new()));
        assert!(normalized.is_empty());
        assert_eq!(normalized.render(), "[]");
    }

    #[test]
    fn test_zero_column_rows_unchanged() {
        let rows = vec![Record::new(), Record::new()];
        assert_eq!(normalize(rows.clone()), NormalizedValue::Rows(rows));
    }

    #[test]
    fn test_render_is_compact_json() {
        let normalized = NormalizedValue::Values(vec![json!("Ron Howard")]);
        assert_eq!(normalized.render(), r#"["Ron Howard"]"#);
    }
}
