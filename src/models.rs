//! Order record
//!
//! An `Order` is created once by the order service and never changed
//! afterwards. All fields are read-only outside this module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Process-unique order identifier (textual UUID v4)
pub type OrderId = String;

/// Immutable order record as stored and returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "5b0a2f7e-3c41-4c8e-9d67-0f2a4a1b9e10")]
    order_id: OrderId,
    #[schema(example = "Laptop")]
    product: String,
    /// Serialized as a string to keep full decimal precision
    #[serde(with = "crate::gateway::types::money::price")]
    #[schema(value_type = String, example = "999.99")]
    price: Decimal,
    #[schema(example = 1)]
    quantity: i32,
}

impl Order {
    pub fn new(order_id: OrderId, product: String, price: Decimal, quantity: i32) -> Self {
        Self {
            order_id,
            product,
            price,
            quantity,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
