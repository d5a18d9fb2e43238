//! Order handlers (list, get, create)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{ApiResult, CreateOrderExtractor, CreateOrderRequest};

/// List all orders
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "All orders, unordered", body = [Order])
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.order_service.list_orders())
}

/// Get one order by id
///
/// GET /api/v1/orders/{orderId}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{orderId}",
    params(("orderId" = String, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "No order with this id")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Order>> {
    let order = state.order_service.get_order(&order_id)?;
    Ok(Json(order))
}

/// Create order endpoint
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body(content = CreateOrderRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Malformed body or price <= 0"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    CreateOrderExtractor(req): CreateOrderExtractor,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let order = state.order_service.create_order(req)?;
    Ok((StatusCode::CREATED, Json(order)))
}
