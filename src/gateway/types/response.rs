//! HTTP error translation
//!
//! The gateway is the single place where [`OrderError`] becomes a status
//! code. Error responses carry no body; the cause goes to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::gateway::services::OrderError;

/// Handler error: a status code with an empty body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = err.code(), error = %err, "Unexpected failure handling order request");
        }
        Self::new(status)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status.into_response()
    }
}
