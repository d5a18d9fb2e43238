//! In-memory order store
//!
//! Maps order_id -> Order in a sharded `DashMap`. Every operation takes
//! only the lock of the shard it touches, so callers never need an
//! external lock. An entry becomes visible to `get`/`list_all` only once
//! its `put` has completed. `list_all` is per-key atomic, not a
//! point-in-time snapshot across keys.

use dashmap::DashMap;

use crate::models::{Order, OrderId};

/// Thread-safe order container, owned by the process and shared via `Arc`.
pub struct OrderStore {
    orders: DashMap<OrderId, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `order_id`.
    pub fn put(&self, order_id: OrderId, order: Order) {
        self.orders.insert(order_id, order);
    }

    /// Look up one order. Absence is a normal outcome, not an error.
    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).map(|entry| entry.value().clone())
    }

    /// Copy out every stored order. Iteration order is unspecified.
    pub fn list_all(&self) -> Vec<Order> {
        self.orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
