//! Customer domain record.
//!
//! # Responsibility
//! - Define the canonical `customers` row shape.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused.
//! - A customer owns its reviews: deleting the customer deletes them.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for customer rows, assigned by storage on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CustomerId = i64;

/// Canonical customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned primary key.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Customer {}, {}>", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Customer;

    #[test]
    fn display_renders_id_and_name() {
        let customer = Customer {
            id: 1,
            name: "Ada".to_string(),
        };
        assert_eq!(customer.to_string(), "<Customer 1, Ada>");
    }
}
