//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    /// Orders currently held in memory
    #[schema(example = 42)]
    pub orders_total: usize,
}

/// Health check endpoint
///
/// The store is in-process, so the service is healthy whenever it can
/// answer at all.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "UP".to_string(),
        timestamp_ms,
        uptime_secs: state.started_at.elapsed().as_secs(),
        orders_total: state.order_service.store().len(),
    })
}
