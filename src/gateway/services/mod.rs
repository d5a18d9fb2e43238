//! Gateway Services Layer
//!
//! Business logic lives here; handlers are thin HTTP adapters that
//! delegate to services.

pub mod order;

pub use order::{OrderError, OrderService};
