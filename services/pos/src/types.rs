//! Point-of-sale entity model.
//!
//! Entities carry server-assigned fields (`id`, `created_at`, `status`);
//! the matching `*Input` types are what clients send. Input fields missing
//! from a request body take their zero value, the same leniency the
//! storefront client relies on when it posts only `{"items": [...]}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier (`"1"`, `"2"`, ...).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-text category.
    pub category: String,
    /// Units on hand. Fulfillment may push this below zero.
    pub stock: i64,
}

/// Client-supplied product fields, used for both create and full replacement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-text category.
    pub category: String,
    /// Units on hand.
    pub stock: i64,
}

impl Product {
    pub(crate) fn from_input(id: String, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
            stock: input.stock,
        }
    }
}

/// One line of an order. Owned by its order, never addressed on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    /// Referenced product id. Not checked against the catalog.
    pub product_id: String,
    /// Units ordered.
    pub quantity: i64,
    /// Unit price at the time of sale.
    pub price: f64,
}

/// Order lifecycle state. Orders are recorded already paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The only state an order is ever in.
    #[default]
    Completed,
}

/// A recorded sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identifier (`"ORD-1000"`, `"ORD-1001"`, ...).
    pub id: String,
    /// Customer reference, possibly empty for walk-in sales.
    pub customer_id: String,
    /// Line items in the order they were submitted.
    pub items: Vec<OrderItem>,
    /// Grand total as computed by the client.
    pub total: f64,
    /// Tax portion of the total.
    pub tax: f64,
    /// Free-text payment method (`"card"`, `"cash"`, ...).
    pub payment_method: String,
    /// Always [`OrderStatus::Completed`].
    pub status: OrderStatus,
    /// When the order was recorded.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied order fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    /// Customer reference.
    pub customer_id: String,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Grand total.
    pub total: f64,
    /// Tax portion.
    pub tax: f64,
    /// Payment method.
    pub payment_method: String,
}

/// A registered customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// When the customer was registered. Kept across updates.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied customer fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
}

impl Customer {
    pub(crate) fn from_input(id: String, input: CustomerInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            created_at,
        }
    }
}

/// Body returned by the delete endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Confirmation text.
    pub message: String,
}

impl DeleteResponse {
    /// Confirmation for a removed `resource`.
    #[must_use]
    pub fn deleted(resource: &str) -> Self {
        Self {
            message: format!("{resource} deleted successfully"),
        }
    }
}
