//! Migration API - cost & ROI analysis service
//!
//! Serves the analysis engine over HTTP: inventory in, portfolio cost
//! summary and roadmap timeline out.

use analyzer_lib::{
    health::{components, HealthRegistry},
    observability::{EngineMetrics, StructuredLogger},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const SERVICE_NAME: &str = "migration-api";
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // JSON logs with env-filter control
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting migration-api");

    let config = config::ApiConfig::load()?;
    info!(api_port = config.api_port, "Service configured");

    let health_registry = HealthRegistry::new();
    health_registry.register(components::ENGINE).await;
    health_registry.register(components::HTTP).await;

    let metrics = EngineMetrics::new();
    let logger = StructuredLogger::new(SERVICE_NAME);
    logger.log_startup(SERVICE_VERSION);

    let app_state = Arc::new(api::AppState::new(
        health_registry.clone(),
        metrics,
        logger.clone(),
        config.rates(),
    ));

    // The engine is stateless; ready as soon as the state is wired
    health_registry.set_ready(true).await;

    let api_handle = tokio::spawn(api::serve(config.api_port, app_state));

    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
