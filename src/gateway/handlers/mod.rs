//! HTTP handlers, grouped by resource

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_order, list_orders};
