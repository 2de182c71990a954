//! Observability for the analysis service
//!
//! Prometheus metrics for analysis throughput and latency, plus
//! structured logging for analysis and assessment events.

use prometheus::{
    register_histogram, register_int_counter, Histogram, IntCounter,
};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Histogram buckets for analysis latency (seconds). Analyses are
/// CPU-bound and fast; the tail buckets catch very large inventories.
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once per process)
static GLOBAL_METRICS: OnceLock<EngineMetricsInner> = OnceLock::new();

struct EngineMetricsInner {
    analysis_latency_seconds: Histogram,
    analyses_total: IntCounter,
    assessments_total: IntCounter,
    servers_analyzed_total: IntCounter,
    empty_portfolio_rejections_total: IntCounter,
    roadmaps_summarized_total: IntCounter,
}

impl EngineMetricsInner {
    fn new() -> Self {
        Self {
            analysis_latency_seconds: register_histogram!(
                "migration_analyzer_analysis_latency_seconds",
                "Time spent computing a full analysis report",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register analysis_latency_seconds"),

            analyses_total: register_int_counter!(
                "migration_analyzer_analyses_total",
                "Total number of analysis reports produced"
            )
            .expect("Failed to register analyses_total"),

            assessments_total: register_int_counter!(
                "migration_analyzer_assessments_total",
                "Total number of inventory assessments performed"
            )
            .expect("Failed to register assessments_total"),

            servers_analyzed_total: register_int_counter!(
                "migration_analyzer_servers_analyzed_total",
                "Total number of servers across all analyses"
            )
            .expect("Failed to register servers_analyzed_total"),

            empty_portfolio_rejections_total: register_int_counter!(
                "migration_analyzer_empty_portfolio_rejections_total",
                "Requests rejected because the inventory had no servers"
            )
            .expect("Failed to register empty_portfolio_rejections_total"),

            roadmaps_summarized_total: register_int_counter!(
                "migration_analyzer_roadmaps_summarized_total",
                "Total number of roadmap timelines summarized"
            )
            .expect("Failed to register roadmaps_summarized_total"),
        }
    }
}

/// Lightweight handle to the global Prometheus metrics.
/// Clones share the same underlying registry entries.
#[derive(Clone)]
pub struct EngineMetrics {
    _private: (),
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(EngineMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &EngineMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    pub fn observe_analysis_latency(&self, duration_secs: f64) {
        self.inner().analysis_latency_seconds.observe(duration_secs);
    }

    pub fn inc_analyses(&self) {
        self.inner().analyses_total.inc();
    }

    pub fn inc_assessments(&self) {
        self.inner().assessments_total.inc();
    }

    pub fn add_servers_analyzed(&self, count: u64) {
        self.inner().servers_analyzed_total.inc_by(count);
    }

    pub fn inc_empty_portfolio_rejections(&self) {
        self.inner().empty_portfolio_rejections_total.inc();
    }

    pub fn inc_roadmaps_summarized(&self) {
        self.inner().roadmaps_summarized_total.inc();
    }
}

/// Structured logger for analysis events
#[derive(Clone)]
pub struct StructuredLogger {
    service_name: String,
}

impl StructuredLogger {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    /// Log a completed portfolio analysis
    pub fn log_analysis(
        &self,
        total_servers: usize,
        total_migration_cost: f64,
        monthly_cloud_cost: f64,
        monthly_savings: f64,
        roi_months: u32,
        roadmap_available: bool,
    ) {
        info!(
            event = "analysis_completed",
            service = %self.service_name,
            total_servers = total_servers,
            total_migration_cost = total_migration_cost,
            monthly_cloud_cost = monthly_cloud_cost,
            monthly_savings = monthly_savings,
            roi_months = roi_months,
            roadmap_available = roadmap_available,
            "Portfolio analysis completed"
        );
    }

    /// Log a completed inventory assessment
    pub fn log_assessment(&self, total_servers: usize) {
        info!(
            event = "assessment_completed",
            service = %self.service_name,
            total_servers = total_servers,
            "Inventory assessment completed"
        );
    }

    /// Log a rejected analysis request
    pub fn log_rejected(&self, reason: &str) {
        warn!(
            event = "analysis_rejected",
            service = %self.service_name,
            reason = %reason,
            "Analysis request rejected"
        );
    }

    pub fn log_startup(&self, version: &str) {
        info!(
            event = "service_started",
            service = %self.service_name,
            version = %version,
            "Migration analyzer started"
        );
    }

    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            service = %self.service_name,
            reason = %reason,
            "Migration analyzer shutting down"
        );
    }
}
