//! Order Service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌────────────┐
//! │  Config  │───▶│ Logging  │───▶│ OrderService │───▶│  Gateway   │
//! │  (YAML)  │    │ (tracing)│    │ Store+Metrics│    │  (axum)    │
//! └──────────┘    └──────────┘    └──────────────┘    └────────────┘
//! ```
//!
//! Flags: `--env/-e <name>` picks `config/<name>.yaml` (default `dev`),
//! `--port <n>` overrides the configured gateway port.

use std::sync::Arc;

use anyhow::Context;

use order_service::config::AppConfig;
use order_service::gateway::{self, state::AppState};
use order_service::logging::init_logging;
use order_service::metrics::{CounterRegistry, ORDERS_CREATED_TOTAL};
use order_service::store::OrderStore;

fn arg_value(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

fn get_env() -> String {
    arg_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> anyhow::Result<Option<u16>> {
    arg_value(&["--port"])
        .map(|p| p.parse::<u16>().with_context(|| format!("invalid --port value: {}", p)))
        .transpose()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config =
        AppConfig::load(&env).with_context(|| format!("loading config for env '{}'", env))?;
    if let Some(port) = get_port_override()? {
        app_config.gateway.port = port;
    }

    let _log_guard = init_logging(&app_config);
    tracing::info!(env = %env, "Starting Order Service");

    // Store and counters live exactly as long as the process
    let store = Arc::new(OrderStore::new());
    let metrics = Arc::new(CounterRegistry::new());
    let state = Arc::new(AppState::from_parts(store.clone(), metrics.clone()));

    let bind_addr = app_config.bind_addr();
    gateway::run_server(&bind_addr, state)
        .await
        .with_context(|| format!("gateway on {} failed", bind_addr))?;

    tracing::info!(
        orders = store.len(),
        orders_total = metrics.get(ORDERS_CREATED_TOTAL),
        "Order Service stopped"
    );
    Ok(())
}
