//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for collection access.
//! Implementations sit on top of any [`Database`](crate::database::Database).

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations on one collection
///
/// Generic over any Entity type. Write payloads are separate types so an
/// entity's key can never end up inside a stored value.
#[async_trait(?Send)]
pub trait Repository<T: Entity> {
    /// Payload of a create request
    type New;
    /// Payload of an update request
    type Patch;

    /// Append a new entity and return its generated key
    async fn create(&self, new: &Self::New) -> DomainResult<String>;

    /// Find entity by key
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// Number of entities in the collection
    async fn count(&self) -> DomainResult<usize>;

    /// The `limit` most recently inserted entities, in insertion order
    async fn last(&self, limit: usize) -> DomainResult<Vec<T>>;

    /// Merge a patch into an existing entity
    async fn update(&self, id: &str, patch: &Self::Patch) -> DomainResult<()>;

    /// Delete entity by key
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
