//! Database Layer - Core Traits
//!
//! The store capabilities the rest of the crate relies on.
//! Implementations can talk REST to a remote store or keep a tree in memory.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::reference::Reference;
use crate::domain::DomainResult;

/// One child of a node: its key and stored value
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub key: String,
    pub value: Value,
}

/// Hierarchical key-value store
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread.
#[async_trait(?Send)]
pub trait Database {
    /// Point read; `None` when nothing is stored at the reference
    async fn get(&self, reference: &Reference) -> DomainResult<Option<Value>>;

    /// The last `limit` children in key order (integer keys first), oldest first
    async fn limit_to_last(&self, reference: &Reference, limit: usize) -> DomainResult<Vec<Snapshot>>;

    /// Number of direct children
    async fn count_children(&self, reference: &Reference) -> DomainResult<usize>;

    /// Append `value` under a freshly generated key and return the key
    async fn push(&self, reference: &Reference, value: Value) -> DomainResult<String>;

    /// Merge `patch` into the node; keys not in the patch are left alone
    async fn update(&self, reference: &Reference, patch: Map<String, Value>) -> DomainResult<()>;

    /// Delete the node. Deleting an absent node succeeds.
    async fn remove(&self, reference: &Reference) -> DomainResult<()>;
}

/// Key as a 32-bit integer, only when written in canonical form
fn integer_key(key: &str) -> Option<i32> {
    key.parse::<i32>().ok().filter(|n| n.to_string() == key)
}

/// Realtime Database key order: integer keys first, numerically, then the
/// rest as strings
pub(crate) fn compare_keys(a: &str, b: &str) -> Ordering {
    match (integer_key(a), integer_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Children of a JSON object in key order. Anything else has no children.
pub(crate) fn sorted_children(node: Value) -> Vec<Snapshot> {
    match node {
        Value::Object(map) => {
            let mut children: Vec<Snapshot> = map
                .into_iter()
                .map(|(key, value)| Snapshot { key, value })
                .collect();
            children.sort_by(|a, b| compare_keys(&a.key, &b.key));
            children
        }
        _ => Vec::new(),
    }
}

/// Keep only the last `limit` entries of an ordered list
pub(crate) fn keep_last(mut children: Vec<Snapshot>, limit: usize) -> Vec<Snapshot> {
    let skip = children.len().saturating_sub(limit);
    children.drain(..skip);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_children() {
        let children = sorted_children(json!({ "b": 2, "a": 1, "c": 3 }));
        let keys: Vec<_> = children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(sorted_children(json!(null)).is_empty());
        assert!(sorted_children(json!("leaf")).is_empty());
    }

    #[test]
    fn test_integer_keys_sort_first_and_numerically() {
        let children = sorted_children(json!({ "b": 0, "10": 0, "9": 0, "-3": 0, "007": 0, "a": 0 }));
        let keys: Vec<_> = children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["-3", "9", "10", "007", "a", "b"]);

        // Out of i32 range counts as a string
        assert_eq!(compare_keys("2147483648", "5"), Ordering::Greater);
        assert_eq!(compare_keys("2147483647", "a"), Ordering::Less);
    }

    #[test]
    fn test_keep_last() {
        let children = sorted_children(json!({ "a": 1, "b": 2, "c": 3 }));
        let tail = keep_last(children.clone(), 2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].key, "b");
        assert_eq!(keep_last(children.clone(), 10).len(), 3);
        assert!(keep_last(children, 0).is_empty());
    }
}
