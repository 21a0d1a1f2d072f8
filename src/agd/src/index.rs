//! Derived indices over loaded tables.
//!
//! Both builders are pure functions of the source table: rows missing the
//! key field (or carrying a non-integer there) are dropped, and the result
//! is never mutated after construction.

use crate::record::{Record, Table};
use std::collections::HashMap;

/// Unique-key index. On duplicate keys the later row wins.
pub fn by_key<'a>(table: &'a Table, field: &str) -> HashMap<i64, &'a Record> {
    let mut index = HashMap::new();
    for row in table.rows() {
        if let Some(key) = row.int(field) {
            index.insert(key, row);
        }
    }
    index
}

/// Grouped index. Table order is preserved within each group.
pub fn group_by_key<'a>(table: &'a Table, field: &str) -> HashMap<i64, Vec<&'a Record>> {
    let mut groups: HashMap<i64, Vec<&Record>> = HashMap::new();
    for row in table.rows() {
        if let Some(key) = row.int(field) {
            groups.entry(key).or_default().push(row);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(doc: serde_json::Value) -> Table {
        Table::from_json("t.json", doc)
    }

    #[test]
    fn test_by_key_last_wins_on_duplicates() {
        let t = table(json!([
            {"id": 7, "v": "first"},
            {"id": 8, "v": "other"},
            {"id": 7, "v": "second"},
        ]));
        let idx = by_key(&t, "id");
        assert_eq!(idx.len(), 2);
        assert_eq!(idx[&7].str_or("v", ""), "second");
    }

    #[test]
    fn test_by_key_drops_rows_missing_field() {
        let t = table(json!([{"id": 1}, {"other": 2}, {"id": "3"}]));
        let idx = by_key(&t, "id");
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_group_by_key_preserves_order() {
        let t = table(json!([
            {"g": 1, "v": "a"},
            {"g": 2, "v": "b"},
            {"g": 1, "v": "c"},
        ]));
        let groups = group_by_key(&t, "g");
        let ones: Vec<&str> = groups[&1].iter().map(|r| r.str_or("v", "")).collect();
        assert_eq!(ones, ["a", "c"]);
        assert_eq!(groups[&2].len(), 1);
    }

    #[test]
    fn test_group_by_key_skips_rows_missing_field() {
        let t = table(json!([{"g": 1}, {"v": "x"}]));
        let groups = group_by_key(&t, "g");
        assert_eq!(groups.len(), 1);
    }
}
