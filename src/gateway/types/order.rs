//! Order request types for the HTTP API
//!
//! - `CreateOrderRequest`: POST body deserialization
//! - `CreateOrderExtractor`: Axum extractor that turns every body
//!   rejection into a bare 400

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Create order request (HTTP request deserialization)
///
/// Fields are taken as-is. The only business rule (price > 0) is applied
/// by the order service, so a negative price still deserializes here.
/// An absent `quantity` is 0.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = "Laptop")]
    pub product: String,
    /// String or number
    #[serde(with = "super::money::price")]
    #[schema(value_type = String, example = "999.99")]
    pub price: Decimal,
    #[serde(default)]
    #[schema(example = 1)]
    pub quantity: i32,
}

/// Body extractor for `POST /api/v1/orders`.
///
/// Unlike `Json<T>`, a missing content type, broken JSON or a shape
/// mismatch all answer 400 with an empty body.
#[derive(Debug)]
pub struct CreateOrderExtractor(pub CreateOrderRequest);

/// Rejection type for CreateOrderExtractor
#[derive(Debug)]
pub struct CreateOrderRejection;

impl IntoResponse for CreateOrderRejection {
    fn into_response(self) -> Response {
        StatusCode::BAD_REQUEST.into_response()
    }
}

impl<S> FromRequest<S> for CreateOrderExtractor
where
    S: Send + Sync,
{
    type Rejection = CreateOrderRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<CreateOrderRequest>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::warn!(status = %e.status(), error = %e.body_text(), "Rejected order body");
                CreateOrderRejection
            })?;

        Ok(CreateOrderExtractor(request))
    }
}
