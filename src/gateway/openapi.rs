//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::CreateOrderRequest;
use crate::models::Order;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Create, list and fetch orders held in memory.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::create_order,
    ),
    components(schemas(Order, CreateOrderRequest, HealthResponse)),
    tags(
        (name = "Orders", description = "Order management"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
