//! Item domain record.
//!
//! # Responsibility
//! - Define the canonical `items` row shape.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused.
//! - An item does not own its reviews: it cannot be deleted while any
//!   review still references it.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for item rows, assigned by storage on insert.
pub type ItemId = i64;

/// Canonical item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned primary key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Item {}, {}, {}>", self.id, self.name, self.price)
    }
}
