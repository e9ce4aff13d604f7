//! Review repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `reviews` rows, the association table joining
//!   customers and items.
//! - Resolve both parent records for detail/serialization use-cases.
//!
//! # Invariants
//! - Creating or re-pointing a review with a dangling `customer_id` or
//!   `item_id` fails with a referential-integrity violation; this layer
//!   never pre-checks, it lets the engine's constraints decide.

use crate::model::customer::Customer;
use crate::model::item::Item;
use crate::model::review::{Review, ReviewId};
use crate::model::{customer::CustomerId, item::ItemId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult, TableRequirement};
use log::info;
use rusqlite::{params, Connection, Row};

const REVIEW_SELECT_SQL: &str = "SELECT id, comment, customer_id, item_id FROM reviews";

const REQUIRED: &[TableRequirement] = &[
    TableRequirement {
        table: "customers",
        columns: &["id", "name"],
    },
    TableRequirement {
        table: "items",
        columns: &["id", "name", "price"],
    },
    TableRequirement {
        table: "reviews",
        columns: &["id", "comment", "customer_id", "item_id"],
    },
];

/// A review resolved together with both rows it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetail {
    pub review: Review,
    pub customer: Customer,
    pub item: Item,
}

/// Repository interface for review operations.
pub trait ReviewRepository {
    /// Inserts one review and returns its storage-assigned id.
    fn create_review(
        &self,
        customer_id: CustomerId,
        item_id: ItemId,
        comment: &str,
    ) -> RepoResult<ReviewId>;
    /// Gets one review by id.
    fn get_review(&self, id: ReviewId) -> RepoResult<Option<Review>>;
    /// Gets one review with its customer and item resolved.
    fn get_review_detail(&self, id: ReviewId) -> RepoResult<Option<ReviewDetail>>;
    /// Lists all reviews ordered by id.
    fn list_reviews(&self) -> RepoResult<Vec<Review>>;
    /// Replaces the review comment.
    fn update_comment(&self, id: ReviewId, comment: &str) -> RepoResult<()>;
    /// Deletes the review.
    fn delete_review(&self, id: ReviewId) -> RepoResult<()>;
}

/// SQLite-backed review repository.
pub struct SqliteReviewRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReviewRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED)?;
        Ok(Self { conn })
    }
}

impl ReviewRepository for SqliteReviewRepository<'_> {
    fn create_review(
        &self,
        customer_id: CustomerId,
        item_id: ItemId,
        comment: &str,
    ) -> RepoResult<ReviewId> {
        self.conn.execute(
            "INSERT INTO reviews (comment, customer_id, item_id) VALUES (?1, ?2, ?3);",
            params![comment, customer_id, item_id],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(
            "event=review_create module=repo status=ok review_id={id} customer_id={customer_id} item_id={item_id} comment_chars={}",
            comment.chars().count()
        );
        Ok(id)
    }

    fn get_review(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_review_row(row)?));
        }
        Ok(None)
    }

    fn get_review_detail(&self, id: ReviewId) -> RepoResult<Option<ReviewDetail>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                r.id,
                r.comment,
                r.customer_id,
                r.item_id,
                c.name AS customer_name,
                i.name AS item_name,
                i.price AS item_price
             FROM reviews r
             INNER JOIN customers c ON c.id = r.customer_id
             INNER JOIN items i ON i.id = r.item_id
             WHERE r.id = ?1;",
        )?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let review = parse_review_row(row)?;
            let customer = Customer {
                id: review.customer_id,
                name: row.get("customer_name")?,
            };
            let item = Item {
                id: review.item_id,
                name: row.get("item_name")?,
                price: row.get("item_price")?,
            };
            return Ok(Some(ReviewDetail {
                review,
                customer,
                item,
            }));
        }
        Ok(None)
    }

    fn list_reviews(&self) -> RepoResult<Vec<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }
        Ok(reviews)
    }

    fn update_comment(&self, id: ReviewId, comment: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE reviews SET comment = ?2 WHERE id = ?1;",
            params![id, comment],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "review",
                id,
            });
        }
        Ok(())
    }

    fn delete_review(&self, id: ReviewId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM reviews WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "review",
                id,
            });
        }
        info!("event=review_delete module=repo status=ok review_id={id}");
        Ok(())
    }
}

pub(crate) fn parse_review_row(row: &Row<'_>) -> RepoResult<Review> {
    Ok(Review {
        id: row.get("id")?,
        comment: row.get("comment")?,
        customer_id: row.get("customer_id")?,
        item_id: row.get("item_id")?,
    })
}
