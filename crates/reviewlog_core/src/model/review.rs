//! Review domain record, the customer/item association row.
//!
//! # Responsibility
//! - Define the canonical `reviews` row shape.
//!
//! # Invariants
//! - `customer_id` and `item_id` always resolve to existing rows; the
//!   storage engine rejects dangling references on insert and update.
//! - One review row links exactly one customer to exactly one item.

use crate::model::customer::CustomerId;
use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for review rows, assigned by storage on insert.
pub type ReviewId = i64;

/// Canonical review record. Both relationship edges live here as foreign
/// keys; traversal in either direction queries by these columns on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Storage-assigned primary key.
    pub id: ReviewId,
    /// Free-text comment body.
    pub comment: String,
    /// Owning customer.
    pub customer_id: CustomerId,
    /// Reviewed item.
    pub item_id: ItemId,
}

impl Display for Review {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Review {}, customer {}, item {}>",
            self.id, self.customer_id, self.item_id
        )
    }
}
