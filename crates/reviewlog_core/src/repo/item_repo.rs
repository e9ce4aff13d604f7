//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `items` rows.
//! - Own item-side relationship traversal (review collection).
//!
//! # Invariants
//! - An item cannot be deleted while reviews reference it; the engine
//!   raises a referential-integrity violation through
//!   `fk_reviews_item_id_items` and this layer propagates it unchanged.

use crate::model::item::{Item, ItemId};
use crate::model::review::Review;
use crate::repo::review_repo::parse_review_row;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult, TableRequirement};
use log::info;
use rusqlite::{params, Connection, Row};

const ITEM_SELECT_SQL: &str = "SELECT id, name, price FROM items";

const REQUIRED: &[TableRequirement] = &[
    TableRequirement {
        table: "items",
        columns: &["id", "name", "price"],
    },
    TableRequirement {
        table: "reviews",
        columns: &["id", "comment", "customer_id", "item_id"],
    },
];

/// Repository interface for item operations.
pub trait ItemRepository {
    /// Inserts one item and returns its storage-assigned id.
    fn create_item(&self, name: &str, price: f64) -> RepoResult<ItemId>;
    /// Gets one item by id.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists all items ordered by id.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Replaces the item name and price.
    fn update_item(&self, id: ItemId, name: &str, price: f64) -> RepoResult<()>;
    /// Deletes the item. Fails with a referential-integrity violation while
    /// any review still references it.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
    /// Lists the item's reviews ordered by id.
    fn list_reviews(&self, id: ItemId) -> RepoResult<Vec<Review>>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, name: &str, price: f64) -> RepoResult<ItemId> {
        self.conn.execute(
            "INSERT INTO items (name, price) VALUES (?1, ?2);",
            params![name, price],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=item_create module=repo status=ok item_id={id}");
        Ok(id)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn update_item(&self, id: ItemId, name: &str, price: f64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items SET name = ?2, price = ?3 WHERE id = ?1;",
            params![id, name, price],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "item", id });
        }
        Ok(())
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM items WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { entity: "item", id });
        }
        info!("event=item_delete module=repo status=ok item_id={id}");
        Ok(())
    }

    fn list_reviews(&self, id: ItemId) -> RepoResult<Vec<Review>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, comment, customer_id, item_id
             FROM reviews
             WHERE item_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }
        Ok(reviews)
    }
}

pub(crate) fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
    })
}
