//! Serialization views with explicit back-edge exclusion.
//!
//! # Responsibility
//! - Define the exchange-format shape of each record together with its
//!   relationship graph.
//! - Keep excluded back-edges out of the type shape entirely: what a view
//!   must not serialize, it cannot represent.
//!
//! # Invariants
//! - `CustomerView` never nests `reviews[].customer`.
//! - `ItemView` never nests `reviews[].item`.
//! - `ReviewView` never nests `customer.reviews` or `item.reviews`.

use crate::model::customer::{Customer, CustomerId};
use crate::model::item::{Item, ItemId};
use crate::model::review::{Review, ReviewId};
use serde::Serialize;

/// Review row as it appears inside a parent's `reviews` collection.
///
/// Carries both foreign keys but expands neither parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub id: ReviewId,
    pub comment: String,
    pub customer_id: CustomerId,
    pub item_id: ItemId,
}

impl From<Review> for ReviewRow {
    fn from(value: Review) -> Self {
        Self {
            id: value.id,
            comment: value.comment,
            customer_id: value.customer_id,
            item_id: value.item_id,
        }
    }
}

/// Customer fields without the `reviews` collection, for nesting inside a
/// review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerBrief {
    pub id: CustomerId,
    pub name: String,
}

impl From<Customer> for CustomerBrief {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Item fields without the `reviews` collection, for nesting inside a
/// review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBrief {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

impl From<Item> for ItemBrief {
    fn from(value: Item) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
        }
    }
}

/// Exchange-format view of a customer and its review collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerView {
    pub id: CustomerId,
    pub name: String,
    pub reviews: Vec<ReviewRow>,
}

impl CustomerView {
    /// Assembles the view from a customer and its current reviews.
    pub fn assemble(customer: Customer, reviews: Vec<Review>) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            reviews: reviews.into_iter().map(ReviewRow::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Exchange-format view of an item and its review collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub reviews: Vec<ReviewRow>,
}

impl ItemView {
    /// Assembles the view from an item and its current reviews.
    pub fn assemble(item: Item, reviews: Vec<Review>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            reviews: reviews.into_iter().map(ReviewRow::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Exchange-format view of a review with both parents expanded one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: ReviewId,
    pub comment: String,
    pub customer_id: CustomerId,
    pub item_id: ItemId,
    pub customer: CustomerBrief,
    pub item: ItemBrief,
}

impl ReviewView {
    /// Assembles the view from a review and its resolved parents.
    pub fn assemble(review: Review, customer: Customer, item: Item) -> Self {
        Self {
            id: review.id,
            comment: review.comment,
            customer_id: review.customer_id,
            item_id: review.item_id,
            customer: CustomerBrief::from(customer),
            item: ItemBrief::from(item),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerView, ReviewRow, ReviewView};
    use crate::model::customer::Customer;
    use crate::model::item::Item;
    use crate::model::review::Review;

    fn sample_review() -> Review {
        Review {
            id: 1,
            comment: "Great".to_string(),
            customer_id: 1,
            item_id: 1,
        }
    }

    #[test]
    fn review_row_keeps_foreign_keys_only() {
        let row = ReviewRow::from(sample_review());
        let json = serde_json::to_value(&row).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("customer_id"));
        assert!(object.contains_key("item_id"));
        assert!(!object.contains_key("customer"));
        assert!(!object.contains_key("item"));
    }

    #[test]
    fn customer_view_excludes_review_back_edge() {
        let customer = Customer {
            id: 1,
            name: "Ada".to_string(),
        };
        let view = CustomerView::assemble(customer, vec![sample_review()]);
        let json = view.to_json().unwrap();
        let review = &json["reviews"][0];
        assert!(review.get("customer").is_none());
    }

    #[test]
    fn review_view_excludes_parent_review_collections() {
        let customer = Customer {
            id: 1,
            name: "Ada".to_string(),
        };
        let item = Item {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
        };
        let view = ReviewView::assemble(sample_review(), customer, item);
        let json = view.to_json().unwrap();
        assert!(json["customer"].get("reviews").is_none());
        assert!(json["item"].get("reviews").is_none());
    }
}
