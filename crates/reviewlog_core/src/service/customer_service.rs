//! Customer use-case service.
//!
//! # Responsibility
//! - Provide stable customer entry points for core callers.
//! - Assemble the customer serialization view (fields + review collection,
//!   back-edges excluded by shape).
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::customer::{Customer, CustomerId};
use crate::model::item::{Item, ItemId};
use crate::model::review::{Review, ReviewId};
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::RepoResult;
use crate::serialize::CustomerView;

/// Use-case service wrapper for customer operations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new customer and returns its storage-assigned id.
    pub fn create_customer(&self, name: &str) -> RepoResult<CustomerId> {
        self.repo.create_customer(name)
    }

    /// Gets one customer by id.
    pub fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        self.repo.get_customer(id)
    }

    /// Lists all customers ordered by id.
    pub fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        self.repo.list_customers()
    }

    /// Replaces the customer name.
    pub fn rename_customer(&self, id: CustomerId, name: &str) -> RepoResult<()> {
        self.repo.rename_customer(id, name)
    }

    /// Deletes the customer together with its reviews (cascade).
    pub fn delete_customer(&self, id: CustomerId) -> RepoResult<()> {
        self.repo.delete_customer(id)
    }

    /// Lists the customer's reviews.
    pub fn list_reviews(&self, id: CustomerId) -> RepoResult<Vec<Review>> {
        self.repo.list_reviews(id)
    }

    /// Projects the items this customer has reviewed, one entry per review.
    pub fn reviewed_items(&self, id: CustomerId) -> RepoResult<Vec<Item>> {
        self.repo.reviewed_items(id)
    }

    /// Materializes a new review (empty comment) linking the customer to an
    /// existing item.
    pub fn add_reviewed_item(&self, id: CustomerId, item_id: ItemId) -> RepoResult<ReviewId> {
        self.repo.add_reviewed_item(id, item_id)
    }

    /// Assembles the serialization view for one customer.
    ///
    /// Returns `None` when the customer does not exist.
    pub fn serialize_customer(&self, id: CustomerId) -> RepoResult<Option<CustomerView>> {
        let Some(customer) = self.repo.get_customer(id)? else {
            return Ok(None);
        };
        let reviews = self.repo.list_reviews(id)?;
        Ok(Some(CustomerView::assemble(customer, reviews)))
    }
}
