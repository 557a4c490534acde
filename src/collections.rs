//! Set- and group-style transforms over in-memory lists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::hash::Hash;

/// Items that occur more than once, each reported once, in the order their
/// second occurrence is seen.
#[must_use]
pub fn find_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Keep the first occurrence of every item, preserving order.
#[must_use]
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    remove_duplicates_by(items, T::clone)
}

/// Keep the first item for every distinct `key(item)`, preserving order.
#[must_use]
pub fn remove_duplicates_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|&item| seen.insert(key(item)))
        .cloned()
        .collect()
}

/// A value or an arbitrarily nested list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A leaf.
    Item(T),
    /// A list whose elements may themselves be lists.
    List(Vec<Nested<T>>),
}

/// Flatten `nested` depth-first into a single list.
#[must_use]
pub fn flatten<T>(nested: Nested<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = vec![nested];
    while let Some(node) = stack.pop() {
        match node {
            Nested::Item(v) => out.push(v),
            Nested::List(children) => stack.extend(children.into_iter().rev()),
        }
    }
    out
}

/// Group JSON objects by the value stored under `key`.
///
/// Objects without `key` (and non-objects) fall under `Value::Null`. Groups
/// appear in the order their key is first seen.
#[must_use]
pub fn group_by_key(items: &[Value], key: &str) -> Vec<(Value, Vec<Value>)> {
    let mut groups: Vec<(Value, Vec<Value>)> = Vec::new();
    for item in items {
        let group_key = item.get(key).cloned().unwrap_or(Value::Null);
        match groups.iter_mut().find(|(k, _)| *k == group_key) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((group_key, vec![item.clone()])),
        }
    }
    groups
}

/// An input row for [`process_active_records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    /// Row id.
    pub id: u64,
    /// Row label.
    pub name: String,
    /// Lifecycle state; only `"active"` rows are kept.
    #[serde(default)]
    pub status: Option<String>,
    /// Numeric payload, 0 when absent.
    #[serde(default)]
    pub value: f64,
}

/// An output row of [`process_active_records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Row id.
    pub id: u64,
    /// Row label.
    pub name: String,
    /// Input value doubled.
    pub value: f64,
}

/// Keep active rows and double their value.
#[must_use]
pub fn process_active_records(records: &[DataRecord]) -> Vec<ProcessedRecord> {
    records
        .iter()
        .filter(|r| r.status.as_deref() == Some("active"))
        .map(|r| ProcessedRecord {
            id: r.id,
            name: r.name.clone(),
            value: r.value * 2.0,
        })
        .collect()
}

/// Convert grouped output into a JSON object keyed by the group's key text.
///
/// String keys are used verbatim; other keys use their JSON rendering.
#[must_use]
pub fn groups_to_json(groups: Vec<(Value, Vec<Value>)>) -> Value {
    let mut map = Map::new();
    for (key, members) in groups {
        let name = match key {
            Value::String(s) => s,
            other => other.to_string(),
        };
        map.insert(name, Value::Array(members));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicates_reported_once_in_second_occurrence_order() {
        let items = ["a", "b", "c", "a", "d", "b", "e", "a"];
        assert_eq!(find_duplicates(&items), vec!["a", "b"]);
        assert!(find_duplicates::<u8>(&[]).is_empty());
    }

    #[test]
    fn remove_duplicates_keeps_first() {
        assert_eq!(remove_duplicates(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        let words = ["Apple", "apple", "Banana", "APPLE"];
        assert_eq!(
            remove_duplicates_by(&words, |w| w.to_lowercase()),
            vec!["Apple", "Banana"]
        );
    }

    #[test]
    fn flatten_nested_lists() -> anyhow::Result<()> {
        let nested: Nested<i32> = serde_json::from_value(json!([[1, 2], [3, [4, 5]], 6]))?;
        assert_eq!(flatten(nested), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(flatten(Nested::Item(7)), vec![7]);
        assert!(flatten::<i32>(Nested::List(vec![])).is_empty());
        Ok(())
    }

    #[test]
    fn group_by_category() -> anyhow::Result<()> {
        let items = vec![
            json!({"category": "A", "value": 1}),
            json!({"category": "B", "value": 2}),
            json!({"category": "A", "value": 3}),
            json!({"value": 4}),
        ];
        let groups = group_by_key(&items, "category");
        assert_eq!(groups.len(), 3);
        let (first_key, first_members) = groups
            .first()
            .ok_or_else(|| anyhow::anyhow!("no groups"))?;
        assert_eq!(first_key, &json!("A"));
        assert_eq!(first_members.len(), 2);
        assert_eq!(groups.last().map(|(key, _)| key), Some(&Value::Null));
        assert_eq!(
            groups_to_json(groups),
            json!({
                "A": [{"category": "A", "value": 1}, {"category": "A", "value": 3}],
                "B": [{"category": "B", "value": 2}],
                "null": [{"value": 4}]
            })
        );
        Ok(())
    }

    #[test]
    fn only_active_records_are_doubled() -> anyhow::Result<()> {
        let records: Vec<DataRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Alice", "status": "active", "value": 10},
            {"id": 2, "name": "Bob", "status": "inactive", "value": 20},
            {"id": 3, "name": "Charlie", "status": "active"}
        ]))?;
        let out = process_active_records(&records);
        assert_eq!(
            out,
            vec![
                ProcessedRecord {
                    id: 1,
                    name: "Alice".into(),
                    value: 20.0,
                },
                ProcessedRecord {
                    id: 3,
                    name: "Charlie".into(),
                    value: 0.0,
                },
            ]
        );
        Ok(())
    }
}
