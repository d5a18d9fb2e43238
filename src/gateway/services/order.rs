//! Order Service - Business logic for order operations
//!
//! Validates create requests, assigns identifiers and mediates every
//! read and write against the [`OrderStore`]. Handlers stay thin HTTP
//! adapters that translate [`OrderError`] into status codes.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::gateway::types::CreateOrderRequest;
use crate::metrics::{MetricsSink, ORDERS_CREATED_TOTAL};
use crate::models::Order;
use crate::store::OrderStore;

/// Order service error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// No order stored under this id
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Request rejected before any mutation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected fault at the HTTP boundary. Service operations never
    /// return it today; handler panics take the `panic_to_500` route.
    /// Details are logged, never returned to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrderError {
    /// Error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "ORDER_NOT_FOUND",
            OrderError::InvalidInput(_) => "INVALID_PARAMETER",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the gateway answers with
    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::NotFound(_) => 404,
            OrderError::InvalidInput(_) => 400,
            OrderError::Internal(_) => 500,
        }
    }
}

/// Order Service - handles all order-related business logic
pub struct OrderService {
    store: Arc<OrderStore>,
    metrics: Arc<dyn MetricsSink>,
}

impl OrderService {
    pub fn new(store: Arc<OrderStore>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self { store, metrics }
    }

    /// Backing store, for read-only inspection (health, tests)
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// All orders, in no particular order. Never fails.
    pub fn list_orders(&self) -> Vec<Order> {
        tracing::info!(total = self.store.len(), "Listing all orders");
        self.store.list_all()
    }

    /// Fetch one order by id
    pub fn get_order(&self, order_id: &str) -> Result<Order, OrderError> {
        tracing::info!(order_id, "Looking up order");

        match self.store.get(order_id) {
            Some(order) => {
                tracing::debug!(?order, "Order found");
                Ok(order)
            }
            None => {
                tracing::warn!(order_id, "Order not found");
                Err(OrderError::NotFound(order_id.to_string()))
            }
        }
    }

    /// Create a new order
    ///
    /// 1. price must be > 0, otherwise nothing is written
    /// 2. fresh UUID v4 id
    /// 3. store, then bump `orders_total`
    pub fn create_order(&self, req: CreateOrderRequest) -> Result<Order, OrderError> {
        validate_price(req.price)?;

        let order_id = Uuid::new_v4().to_string();
        let order = Order::new(order_id.clone(), req.product, req.price, req.quantity);

        self.store.put(order_id, order.clone());
        tracing::info!(?order, "New order created");

        tracing::info!(counter = ORDERS_CREATED_TOTAL, "Incrementing counter");
        self.metrics.increment(ORDERS_CREATED_TOTAL);

        Ok(order)
    }
}

/// Price must be strictly positive. Quantity is deliberately unchecked.
fn validate_price(price: Decimal) -> Result<(), OrderError> {
    if price <= Decimal::ZERO {
        tracing::error!(%price, "Invalid price received");
        return Err(OrderError::InvalidInput(format!(
            "Price must be greater than zero, got {}",
            price
        )));
    }
    Ok(())
}
