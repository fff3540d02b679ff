//! In-Memory Database
//!
//! A JSON tree behind a mutex. Clones share the same tree, so one instance
//! can be handed to every part of the app. Used by the tests and by demo
//! mode when no remote store is configured.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::push_id::PushIdGenerator;
use super::reference::Reference;
use super::traits::{keep_last, sorted_children, Database, Snapshot};
use crate::domain::{now_millis, DomainResult};

#[derive(Debug)]
struct MemoryTree {
    root: Value,
    ids: PushIdGenerator,
}

/// In-process implementation of [`Database`]
#[derive(Debug, Clone)]
pub struct MemoryDatabase {
    tree: Arc<Mutex<MemoryTree>>,
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::with_data(Value::Object(Map::new()))
    }

    /// Start from an existing tree
    pub fn with_data(root: Value) -> Self {
        Self {
            tree: Arc::new(Mutex::new(MemoryTree {
                root,
                ids: PushIdGenerator::new(),
            })),
        }
    }

    /// Replace whatever is stored at `reference`
    pub async fn set(&self, reference: &Reference, value: Value) {
        let mut tree = self.tree.lock().await;
        set_at(&mut tree.root, reference.segments(), value);
    }
}

#[async_trait(?Send)]
impl Database for MemoryDatabase {
    async fn get(&self, reference: &Reference) -> DomainResult<Option<Value>> {
        let tree = self.tree.lock().await;
        Ok(node_at(&tree.root, reference.segments())
            .filter(|node| !is_empty(node))
            .cloned())
    }

    async fn limit_to_last(&self, reference: &Reference, limit: usize) -> DomainResult<Vec<Snapshot>> {
        let tree = self.tree.lock().await;
        let node = node_at(&tree.root, reference.segments())
            .cloned()
            .unwrap_or(Value::Null);
        Ok(keep_last(sorted_children(node), limit))
    }

    async fn count_children(&self, reference: &Reference) -> DomainResult<usize> {
        let tree = self.tree.lock().await;
        Ok(node_at(&tree.root, reference.segments())
            .and_then(Value::as_object)
            .map_or(0, Map::len))
    }

    async fn push(&self, reference: &Reference, value: Value) -> DomainResult<String> {
        let mut tree = self.tree.lock().await;
        let key = tree.ids.next_id(now_millis());
        let child = reference.child(&key);
        set_at(&mut tree.root, child.segments(), value);
        log::debug!("memory push {}", child);
        Ok(key)
    }

    async fn update(&self, reference: &Reference, patch: Map<String, Value>) -> DomainResult<()> {
        let mut tree = self.tree.lock().await;
        for (path, value) in patch {
            set_at(&mut tree.root, reference.child(&path).segments(), value);
        }
        Ok(())
    }

    async fn remove(&self, reference: &Reference) -> DomainResult<()> {
        let mut tree = self.tree.lock().await;
        remove_at(&mut tree.root, reference.segments());
        Ok(())
    }
}

/// Null and `{}` both mean "nothing here"
fn is_empty(node: &Value) -> bool {
    match node {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn node_at<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |node, segment| node.get(segment))
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced by an object"),
    }
}

fn set_at(root: &mut Value, segments: &[String], value: Value) {
    if is_empty(&value) {
        remove_at(root, segments);
        return;
    }
    let mut node = root;
    for segment in segments {
        node = ensure_object(node)
            .entry(segment.clone())
            .or_insert(Value::Null);
    }
    *node = value;
}

fn remove_at(root: &mut Value, segments: &[String]) {
    let Some((last, parents)) = segments.split_last() else {
        *root = Value::Object(Map::new());
        return;
    };
    let parent = parents
        .iter()
        .try_fold(&mut *root, |node, segment| node.get_mut(segment));
    if let Some(Value::Object(map)) = parent {
        map.remove(last);
    }
    prune_empty(root, parents);
}

/// Drop ancestors left empty by a removal, deepest first
fn prune_empty(node: &mut Value, segments: &[String]) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if let Value::Object(map) = node {
        let emptied = match map.get_mut(first) {
            Some(child) => {
                prune_empty(child, rest);
                is_empty(child)
            }
            None => false,
        };
        if emptied {
            map.remove(first);
        }
    }
}
