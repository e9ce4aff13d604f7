//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `customers` rows.
//! - Own customer-side relationship traversal: review collection, reviewed
//!   items projection, and the review-creating convenience for it.
//!
//! # Invariants
//! - Deleting a customer deletes its reviews through
//!   `fk_reviews_customer_id_customers` (cascade); no application code walks
//!   the child rows.
//! - Traversal accessors query by foreign key on demand; no row caches a
//!   link to another row.

use crate::model::customer::{Customer, CustomerId};
use crate::model::item::{Item, ItemId};
use crate::model::review::{Review, ReviewId};
use crate::repo::review_repo::parse_review_row;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult, TableRequirement};
use log::info;
use rusqlite::{params, Connection, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT id, name FROM customers";

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

/// Repository interface for customer operations.
pub trait CustomerRepository {
    /// Inserts one customer and returns its storage-assigned id.
    fn create_customer(&self, name: &str) -> RepoResult<CustomerId>;
    /// Gets one customer by id.
    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Lists all customers ordered by id.
    fn list_customers(&self) -> RepoResult<Vec<Customer>>;
    /// Replaces the customer name.
    fn rename_customer(&self, id: CustomerId, name: &str) -> RepoResult<()>;
    /// Deletes the customer; its reviews go with it (cascade).
    fn delete_customer(&self, id: CustomerId) -> RepoResult<()>;
    /// Lists the customer's reviews ordered by id.
    fn list_reviews(&self, id: CustomerId) -> RepoResult<Vec<Review>>;
    /// Projects the items this customer has reviewed, one entry per review.
    fn reviewed_items(&self, id: CustomerId) -> RepoResult<Vec<Item>>;
    /// Materializes a new review linking the customer to an existing item.
    ///
    /// The created review has an empty comment; callers wanting one go
    /// through review creation instead.
    fn add_reviewed_item(&self, id: CustomerId, item_id: ItemId) -> RepoResult<ReviewId>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED)?;
        Ok(Self { conn })
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn create_customer(&self, name: &str) -> RepoResult<CustomerId> {
        self.conn
            .execute("INSERT INTO customers (name) VALUES (?1);", [name])?;
        let id = self.conn.last_insert_rowid();
        info!("event=customer_create module=repo status=ok customer_id={id}");
        Ok(id)
    }

    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_customer_row(row)?));
        }
        Ok(None)
    }

    fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }
        Ok(customers)
    }

    fn rename_customer(&self, id: CustomerId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE customers SET name = ?2 WHERE id = ?1;",
            params![id, name],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "customer",
                id,
            });
        }
        Ok(())
    }

    fn delete_customer(&self, id: CustomerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "customer",
                id,
            });
        }
        info!("event=customer_delete module=repo status=ok customer_id={id}");
        Ok(())
    }

    fn list_reviews(&self, id: CustomerId) -> RepoResult<Vec<Review>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, comment, customer_id, item_id
             FROM reviews
             WHERE customer_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }
        Ok(reviews)
    }

    fn reviewed_items(&self, id: CustomerId) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT i.id, i.name, i.price
             FROM reviews r
             INNER JOIN items i ON i.id = r.item_id
             WHERE r.customer_id = ?1
             ORDER BY r.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(Item {
                id: row.get("id")?,
                name: row.get("name")?,
                price: row.get("price")?,
            });
        }
        Ok(items)
    }

    fn add_reviewed_item(&self, id: CustomerId, item_id: ItemId) -> RepoResult<ReviewId> {
        self.conn.execute(
            "INSERT INTO reviews (comment, customer_id, item_id) VALUES ('', ?1, ?2);",
            params![id, item_id],
        )?;
        let review_id = self.conn.last_insert_rowid();
        info!(
            "event=review_create module=repo status=ok review_id={review_id} customer_id={id} item_id={item_id} via=reviewed_items"
        );
        Ok(review_id)
    }
}

pub(crate) fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
