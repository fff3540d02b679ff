//! Item Service
//!
//! The operations behind the item table: load a page, create, edit, delete.
//! Every call returns a typed result; the caller decides how to show it.

use crate::database::{Database, Reference};
use crate::domain::{now_millis, DomainResult, ItemForm, ItemRow};
use crate::pagination::FetchWindow;
use crate::repository::{ItemRepository, Repository};

use super::list_state::Page;

/// Item operations over one collection of a [`Database`]
#[derive(Debug, Clone)]
pub struct ItemService<D> {
    repo: ItemRepository<D>,
}

impl<D: Database> ItemService<D> {
    pub fn new(db: D, collection: Reference) -> Self {
        Self {
            repo: ItemRepository::new(db, collection),
        }
    }

    pub fn repository(&self) -> &ItemRepository<D> {
        &self.repo
    }

    /// Count the collection, read the window the page needs, then sort,
    /// slice and format it.
    pub async fn fetch_page(&self, window: FetchWindow) -> DomainResult<Page> {
        let total_items = self.repo.count().await?;
        let fetched = self.repo.last(window.limit()).await?;
        log::debug!(
            "Fetched {} of {} items (window {})",
            fetched.len(),
            total_items,
            window.limit()
        );
        let items = window.slice(fetched).iter().map(|item| item.to_row()).collect();
        Ok(Page { items, total_items })
    }

    /// Create an item from the form; stamps `createdAt`.
    /// An empty or blank name is rejected with `InvalidInput` before any write.
    pub async fn create(&self, form: ItemForm) -> DomainResult<String> {
        form.validate()?;
        self.repo.create(&form.into_new_item(now_millis())).await
    }

    /// Save the edit form over an existing item; stamps `updatedAt`.
    /// Rejects a blank name the same way as [`create`](Self::create).
    pub async fn edit(&self, id: &str, form: ItemForm) -> DomainResult<()> {
        form.validate()?;
        self.repo.update(id, &form.into_patch(now_millis())).await
    }

    /// Same as [`edit`](Self::edit), taking the selected row
    pub async fn edit_row(&self, row: &ItemRow, form: ItemForm) -> DomainResult<()> {
        self.edit(&row.id, form).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repo.delete(id).await
    }
}
