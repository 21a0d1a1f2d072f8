//! Loosely-typed rows over the JSON exports.
//!
//! Source tables carry no fixed schema: field sets vary per entity category
//! and zero-valued fields are frequently omitted entirely. A [`Record`] is a
//! string-keyed JSON object with defaulting accessors; a [`Table`] is a named,
//! immutable, ordered sequence of records.

use serde_json::{Map, Value};

/// One row of a source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap a JSON value, returning `None` for non-object rows.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw field access.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// True if the field is present at all.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Integer field, `None` when absent or non-integer.
    pub fn int(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(Value::as_i64)
    }

    /// Integer field with a default.
    pub fn int_or(&self, field: &str, default: i64) -> i64 {
        self.int(field).unwrap_or(default)
    }

    /// Float field with a default. Integer values are widened.
    pub fn float_or(&self, field: &str, default: f64) -> f64 {
        self.0
            .get(field)
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }

    /// String field with a default.
    pub fn str_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or(default)
    }

    /// Array field as a slice, empty when absent or not an array.
    pub fn list(&self, field: &str) -> &[Value] {
        self.0
            .get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Object elements of an array field, as records. Non-object elements
    /// are skipped.
    pub fn records(&self, field: &str) -> Vec<Record> {
        self.list(field)
            .iter()
            .filter_map(|v| Record::from_value(v.clone()))
            .collect()
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// A named, immutable table of records.
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: String,
    rows: Vec<Record>,
}

impl Table {
    /// Build a table from a parsed JSON document. Only top-level array
    /// elements that are objects become rows; everything else is dropped.
    pub fn from_json(name: impl Into<String>, doc: Value) -> Self {
        let rows = match doc {
            Value::Array(items) => items.into_iter().filter_map(Record::from_value).collect(),
            _ => Vec::new(),
        };
        Self {
            name: name.into(),
            rows,
        }
    }

    /// An empty table, used when the backing file is absent.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Source name this table was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        Record::from_value(v).unwrap()
    }

    #[test]
    fn test_defaulting_accessors() {
        let r = rec(json!({"id": 7, "name": "x", "ratio": 1.5}));
        assert_eq!(r.int("id"), Some(7));
        assert_eq!(r.int("missing"), None);
        assert_eq!(r.int_or("missing", 20), 20);
        assert_eq!(r.float_or("ratio", 0.0), 1.5);
        // integer widening
        assert_eq!(r.float_or("id", 0.0), 7.0);
        assert_eq!(r.str_or("name", ""), "x");
        assert_eq!(r.str_or("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_list_and_nested_records() {
        let r = rec(json!({"props": [{"type": "A", "value": 1.0}, 3, {"type": "B"}]}));
        assert_eq!(r.list("props").len(), 3);
        let nested = r.records("props");
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].str_or("type", ""), "A");
        assert_eq!(nested[1].float_or("value", 0.0), 0.0);
        assert!(r.list("absent").is_empty());
    }

    #[test]
    fn test_table_skips_non_object_rows() {
        let t = Table::from_json("t.json", json!([{"id": 1}, "junk", null, {"id": 2}]));
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows()[1].int("id"), Some(2));
    }

    #[test]
    fn test_table_from_non_array_doc() {
        let t = Table::from_json("t.json", json!({"not": "an array"}));
        assert!(t.is_empty());
    }
}
