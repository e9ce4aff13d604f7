//! Item use-case service.
//!
//! # Responsibility
//! - Provide stable item entry points for core callers.
//! - Assemble the item serialization view.

use crate::model::item::{Item, ItemId};
use crate::model::review::Review;
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoResult;
use crate::serialize::ItemView;

/// Use-case service wrapper for item operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new item and returns its storage-assigned id.
    pub fn create_item(&self, name: &str, price: f64) -> RepoResult<ItemId> {
        self.repo.create_item(name, price)
    }

    /// Gets one item by id.
    pub fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.get_item(id)
    }

    /// Lists all items ordered by id.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_items()
    }

    /// Replaces the item name and price.
    pub fn update_item(&self, id: ItemId, name: &str, price: f64) -> RepoResult<()> {
        self.repo.update_item(id, name, price)
    }

    /// Deletes the item. Propagates the referential-integrity violation when
    /// reviews still reference it.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        self.repo.delete_item(id)
    }

    /// Lists the item's reviews.
    pub fn list_reviews(&self, id: ItemId) -> RepoResult<Vec<Review>> {
        self.repo.list_reviews(id)
    }

    /// Assembles the serialization view for one item.
    ///
    /// Returns `None` when the item does not exist.
    pub fn serialize_item(&self, id: ItemId) -> RepoResult<Option<ItemView>> {
        let Some(item) = self.repo.get_item(id)? else {
            return Ok(None);
        };
        let reviews = self.repo.list_reviews(id)?;
        Ok(Some(ItemView::assemble(item, reviews)))
    }
}
