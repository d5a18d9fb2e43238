pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Turn a handler panic into a bare 500. The panic payload is logged,
/// never sent to the client.
fn panic_to_500(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(%detail, "Unexpected error while handling request");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Build the complete router. Tests drive this in-process.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route(
            "/api/v1/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/api/v1/orders/{order_id}", get(handlers::get_order))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(panic_to_500))
        .layer(TraceLayer::new_for_http())
}

/// Start HTTP Gateway server; returns after Ctrl+C.
pub async fn run_server(bind_addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await.inspect_err(|e| {
        tracing::error!(%bind_addr, error = %e, "Failed to bind gateway listener");
    })?;

    tracing::info!("Gateway listening on http://{}", bind_addr);
    tracing::info!("API Docs: http://{}/docs", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
