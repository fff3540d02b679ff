//! Item Repository
//!
//! Items live as children of one collection node, keyed by push keys.
//! Writes go through the pass-throughs in `writes`; reads materialize
//! snapshots into [`Item`]s.

use async_trait::async_trait;

use super::traits::Repository;
use super::writes::{create_item, remove_item, update_item};
use crate::database::{Database, Reference};
use crate::domain::{DomainResult, Item, ItemPatch, NewItem};

/// Repository for the item collection of a [`Database`]
#[derive(Debug, Clone)]
pub struct ItemRepository<D> {
    db: D,
    collection: Reference,
}

impl<D: Database> ItemRepository<D> {
    pub fn new(db: D, collection: Reference) -> Self {
        Self { db, collection }
    }

    pub fn collection(&self) -> &Reference {
        &self.collection
    }

    pub fn database(&self) -> &D {
        &self.db
    }
}

#[async_trait(?Send)]
impl<D: Database> Repository<Item> for ItemRepository<D> {
    type New = NewItem;
    type Patch = ItemPatch;

    async fn create(&self, new: &NewItem) -> DomainResult<String> {
        let id = create_item(&self.db, &self.collection, new).await?;
        log::info!("Created item {} in {}", id, self.collection);
        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>> {
        match self.db.get(&self.collection.child(id)).await? {
            Some(value) => Item::from_snapshot(id, value).map(Some),
            None => Ok(None),
        }
    }

    async fn count(&self) -> DomainResult<usize> {
        self.db.count_children(&self.collection).await
    }

    /// Children that are not objects are skipped, not fatal
    async fn last(&self, limit: usize) -> DomainResult<Vec<Item>> {
        let snapshots = self.db.limit_to_last(&self.collection, limit).await?;
        Ok(snapshots
            .into_iter()
            .filter_map(|snapshot| match Item::from_snapshot(&snapshot.key, snapshot.value) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping {} in {}: {}", snapshot.key, self.collection, e);
                    None
                }
            })
            .collect())
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> DomainResult<()> {
        update_item(&self.db, &self.collection, id, patch).await?;
        log::info!("Updated item {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        remove_item(&self.db, &self.collection, id).await?;
        log::info!("Removed item {}", id);
        Ok(())
    }
}
