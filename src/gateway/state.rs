use std::sync::Arc;
use std::time::Instant;

use crate::gateway::services::OrderService;
use crate::metrics::MetricsSink;
use crate::store::OrderStore;

/// Gateway application state (shared across handlers)
#[derive(Clone)]
pub struct AppState {
    /// Order business logic
    pub order_service: Arc<OrderService>,
    /// Process start, for health reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(order_service: Arc<OrderService>) -> Self {
        Self {
            order_service,
            started_at: Instant::now(),
        }
    }

    /// Wire a service over the given store and counter sink
    pub fn from_parts(store: Arc<OrderStore>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self::new(Arc::new(OrderService::new(store, metrics)))
    }
}
