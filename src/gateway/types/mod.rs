//! Gateway types module
//!
//! ## Input Types
//! - [`CreateOrderRequest`]: POST body for order creation
//! - [`CreateOrderExtractor`]: Axum extractor mapping body errors to 400
//!
//! ## Output Types
//! - [`ApiError`]: status-only error response
//!
//! ## Submodules
//! - [`money`]: Decimal price encoding
//! - [`order`]: Order request types
//! - [`response`]: Error translation

pub mod money;
pub mod order;
pub mod response;

pub use order::{CreateOrderExtractor, CreateOrderRejection, CreateOrderRequest};
pub use response::{ApiError, ApiResult};
