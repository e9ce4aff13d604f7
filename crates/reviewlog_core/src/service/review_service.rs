//! Review use-case service.
//!
//! # Responsibility
//! - Provide stable review entry points for core callers.
//! - Assemble the review serialization view with both parents expanded one
//!   level, their review collections excluded by shape.

use crate::model::customer::CustomerId;
use crate::model::item::ItemId;
use crate::model::review::{Review, ReviewId};
use crate::repo::review_repo::ReviewRepository;
use crate::repo::RepoResult;
use crate::serialize::ReviewView;

/// Use-case service wrapper for review operations.
pub struct ReviewService<R: ReviewRepository> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new review linking a customer to an item.
    ///
    /// Propagates the referential-integrity violation when either reference
    /// is dangling.
    pub fn create_review(
        &self,
        customer_id: CustomerId,
        item_id: ItemId,
        comment: &str,
    ) -> RepoResult<ReviewId> {
        self.repo.create_review(customer_id, item_id, comment)
    }

    /// Gets one review by id.
    pub fn get_review(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        self.repo.get_review(id)
    }

    /// Lists all reviews ordered by id.
    pub fn list_reviews(&self) -> RepoResult<Vec<Review>> {
        self.repo.list_reviews()
    }

    /// Replaces the review comment.
    pub fn update_comment(&self, id: ReviewId, comment: &str) -> RepoResult<()> {
        self.repo.update_comment(id, comment)
    }

    /// Deletes the review.
    pub fn delete_review(&self, id: ReviewId) -> RepoResult<()> {
        self.repo.delete_review(id)
    }

    /// Assembles the serialization view for one review.
    ///
    /// Returns `None` when the review does not exist.
    pub fn serialize_review(&self, id: ReviewId) -> RepoResult<Option<ReviewView>> {
        let Some(detail) = self.repo.get_review_detail(id)? else {
            return Ok(None);
        };
        Ok(Some(ReviewView::assemble(
            detail.review,
            detail.customer,
            detail.item,
        )))
    }
}
