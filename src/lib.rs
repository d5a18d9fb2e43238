//! Order Service - minimal order management over HTTP
//!
//! Clients create orders, list all orders and fetch a single order by
//! id. Orders live in memory for the lifetime of the process.
//!
//! # Modules
//!
//! - [`models`] - Immutable `Order` record
//! - [`store`] - Concurrent in-memory order store
//! - [`metrics`] - Counter capability injected into the service
//! - [`gateway`] - Axum HTTP boundary, order service, OpenAPI
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use gateway::services::{OrderError, OrderService};
pub use gateway::state::AppState;
pub use gateway::types::CreateOrderRequest;
pub use metrics::{CounterRegistry, MetricsSink, NoopMetrics, ORDERS_CREATED_TOTAL};
pub use models::{Order, OrderId};
pub use store::OrderStore;
