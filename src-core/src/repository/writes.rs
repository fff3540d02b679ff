//! Collection Writes
//!
//! Thin pass-throughs to the store's write primitives. No validation,
//! no retries, no existence checks.

use serde::Serialize;
use serde_json::Value;

use crate::database::{Database, Reference};
use crate::domain::{DomainError, DomainResult};

/// Append `body` under `path`; the store picks the key
pub async fn create_item<D, B>(db: &D, path: &Reference, body: &B) -> DomainResult<String>
where
    D: Database + ?Sized,
    B: Serialize + ?Sized,
{
    let value = serde_json::to_value(body)?;
    db.push(path, value).await
}

/// Merge `body` into `path/id`; fields missing from `body` are untouched
pub async fn update_item<D, B>(db: &D, path: &Reference, id: &str, body: &B) -> DomainResult<()>
where
    D: Database + ?Sized,
    B: Serialize + ?Sized,
{
    match serde_json::to_value(body)? {
        Value::Object(patch) => db.update(&path.child(id), patch).await,
        other => Err(DomainError::InvalidInput(format!(
            "update body must be an object, got {}",
            other
        ))),
    }
}

/// Delete `path/id`. Removing a missing key is not an error.
pub async fn remove_item<D>(db: &D, path: &Reference, id: &str) -> DomainResult<()>
where
    D: Database + ?Sized,
{
    db.remove(&path.child(id)).await
}
