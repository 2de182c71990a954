//! HTTP API: analysis and assessment endpoints, health checks, and
//! Prometheus metrics

use analyzer_lib::{
    assessment,
    cost::CostRates,
    engine,
    health::{ComponentStatus, HealthRegistry},
    models::{AnalysisInput, ServerAnalysis, ServerRecord},
    observability::{EngineMetrics, StructuredLogger},
    AnalysisError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub health_registry: HealthRegistry,
    pub metrics: EngineMetrics,
    pub logger: StructuredLogger,
    pub rates: CostRates,
}

impl AppState {
    pub fn new(
        health_registry: HealthRegistry,
        metrics: EngineMetrics,
        logger: StructuredLogger,
        rates: CostRates,
    ) -> Self {
        Self {
            health_registry,
            metrics,
            logger,
            rates,
        }
    }
}

/// JSON error body for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request body for the assessment endpoint
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub servers: Vec<ServerRecord>,
}

/// Response body for the assessment endpoint
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub servers: Vec<ServerAnalysis>,
    pub total: usize,
}

/// Run a full cost/roadmap analysis over an inventory
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AnalysisInput>,
) -> impl IntoResponse {
    let started = Instant::now();

    match engine::analyze_with_rates(&input, state.rates) {
        Ok(report) => {
            state
                .metrics
                .observe_analysis_latency(started.elapsed().as_secs_f64());
            state.metrics.inc_analyses();
            state.metrics.add_servers_analyzed(report.total_servers as u64);
            if report.roadmap.as_ref().is_some_and(|r| r.available) {
                state.metrics.inc_roadmaps_summarized();
            }

            state.logger.log_analysis(
                report.total_servers,
                report.portfolio.total_migration_cost,
                report.portfolio.monthly_cloud_cost,
                report.portfolio.monthly_savings,
                report.portfolio.roi_months,
                report.roadmap.as_ref().is_some_and(|r| r.available),
            );

            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error @ AnalysisError::EmptyPortfolio) => {
            state.metrics.inc_empty_portfolio_rejections();
            state.logger.log_rejected(&error.to_string());
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Assess a raw inventory into engine-ready analyses
async fn assess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessRequest>,
) -> impl IntoResponse {
    let servers = assessment::assess_inventory(request.servers);
    state.metrics.inc_assessments();
    state.logger.log_assessment(servers.len());

    let total = servers.len();
    (StatusCode::OK, Json(AssessResponse { servers, total }))
}

/// Health check: 200 while operational, 503 once a component fails
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check for load-balancer rotation
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/assess", post(assess))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
