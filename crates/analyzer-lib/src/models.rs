//! Core data models for the migration analyzer
//!
//! All payload types use camelCase wire names to match the inventory
//! JSON produced by the discovery layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// CPU metrics for a single server
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuMetrics {
    pub cores: f64,
    /// Average utilization as a percentage (0-100)
    pub utilization: f64,
}

/// Capacity metrics (memory or storage), stored in kibibytes.
/// Invariant: `used <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityMetrics {
    pub total: f64,
    pub used: f64,
}

/// Network utilization for a single server
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkUtilization {
    /// Provisioned bandwidth in GB
    pub bandwidth: f64,
    /// Average usage as a percentage (0-100)
    pub average_usage: f64,
}

/// Full metric set for a server
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetrics {
    pub cpu: CpuMetrics,
    pub memory: CapacityMetrics,
    pub storage: CapacityMetrics,
    /// Some discovery payloads omit network data; treated as zero usage
    #[serde(default)]
    pub network_utilization: NetworkUtilization,
}

/// A discovered server with its metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub server_id: String,
    pub server_name: String,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub metrics: ServerMetrics,
}

/// Migration strategy classification
///
/// Labels outside the three known strategies deserialize to `Unknown`
/// rather than failing; cost lookups treat `Unknown` as `Rehost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Rehost,
    Replatform,
    Refactor,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Recommended migration strategy for a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationStrategy {
    #[serde(rename = "strategy", default)]
    pub kind: StrategyKind,
    #[serde(default)]
    pub description: String,
    /// Ordered list of cloud services suggested for the migration
    #[serde(default, alias = "aws_services")]
    pub recommended_services: Vec<String>,
}

/// Coarse migration-difficulty classification
///
/// Unrecognized levels deserialize to `Unknown`; the cost multiplier
/// for `Unknown` is 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Complexity assessment for a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAssessment {
    pub level: ComplexityLevel,
    /// Complexity score as a percentage of the maximum (0-100)
    #[serde(default)]
    pub percentage: f64,
    /// Raw factor-point total behind `percentage`
    #[serde(default)]
    pub score: f64,
    /// Per-factor inputs that produced the score
    #[serde(default)]
    pub factors: HashMap<String, f64>,
}

/// One server together with its recommendation and assessment.
/// Constructed upstream, read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerAnalysis {
    #[serde(rename = "serverData")]
    pub server: ServerRecord,
    #[serde(rename = "migrationStrategy")]
    pub strategy: MigrationStrategy,
    pub complexity: ComplexityAssessment,
}

/// Per-server cost breakdown, all amounts in one fixed currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub projected_monthly_cost: f64,
    pub current_monthly_cost: f64,
    pub migration_cost: f64,
    /// May be negative when the cloud projection exceeds current spend
    pub savings: f64,
}

/// Portfolio-level cost aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCostSummary {
    pub total_migration_cost: f64,
    pub monthly_cloud_cost: f64,
    pub current_costs: f64,
    pub monthly_savings: f64,
    /// Months of savings needed to offset the migration cost.
    /// `0` means no break-even within the model: savings are
    /// non-positive, or the cost is trivial relative to them.
    pub roi_months: u32,
    pub annual_savings: f64,
    pub three_year_savings: f64,
    /// 0 when `current_costs` is zero (guarded; never NaN)
    pub cost_reduction_percent: f64,
    /// Breakdown per `server_id`; duplicate IDs overwrite silently
    pub servers: HashMap<String, CostBreakdown>,
}

/// A migration phase as supplied by the upstream planner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub name: String,
    /// ISO date, `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: String,
    /// Planner-supplied display string; recomputed from the date span
    /// when both dates parse
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub critical_path: bool,
    #[serde(default)]
    pub complexity: ComplexityLevel,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
}

/// A normalized phase ready for presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub critical_path: bool,
    pub complexity: ComplexityLevel,
    pub strategy: String,
    pub tasks: Vec<String>,
    pub deliverables: Vec<String>,
    pub risks: Vec<String>,
    /// Terminal phase marker (suppresses trailing connectors downstream)
    pub is_final: bool,
}

/// Bounds of the full phase list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub duration: String,
    /// Estimated effort in person-hours
    pub total_effort: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Roadmap portion of the analysis input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInput {
    pub project_summary: ProjectSummary,
    #[serde(default)]
    pub timeline: Vec<RoadmapPhase>,
}

/// Summarized roadmap; `available` is false when no phase data exists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_summary: Option<ProjectSummary>,
    pub phases: Vec<TimelinePhase>,
}

/// Full engine input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub servers: Vec<ServerAnalysis>,
    #[serde(default)]
    pub roadmap: Option<RoadmapInput>,
}

/// Full engine output, consumed by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_servers: usize,
    /// Mean of per-server complexity percentages
    pub average_complexity_score: f64,
    pub portfolio: PortfolioCostSummary,
    pub roadmap: Option<RoadmapResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_deserializes() {
        let json = r#"{"strategy": "Retire", "description": "decommission"}"#;
        let strategy: MigrationStrategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.kind, StrategyKind::Unknown);
    }

    #[test]
    fn test_unknown_complexity_level_deserializes() {
        let level: ComplexityLevel = serde_json::from_str(r#""Extreme""#).unwrap();
        assert_eq!(level, ComplexityLevel::Unknown);
    }

    #[test]
    fn test_server_analysis_wire_names() {
        let json = r#"{
            "serverData": {
                "serverId": "srv-1",
                "serverName": "db-primary",
                "applications": ["postgres"],
                "metrics": {
                    "cpu": {"cores": 4, "utilization": 50},
                    "memory": {"total": 16777216, "used": 8388608},
                    "storage": {"total": 1048576, "used": 524288}
                }
            },
            "migrationStrategy": {"strategy": "Replatform", "description": ""},
            "complexity": {"level": "Medium", "percentage": 55}
        }"#;
        let analysis: ServerAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.server.server_id, "srv-1");
        assert_eq!(analysis.strategy.kind, StrategyKind::Replatform);
        assert_eq!(analysis.complexity.level, ComplexityLevel::Medium);
        // network data was absent, defaults to zero usage
        assert_eq!(analysis.server.metrics.network_utilization.bandwidth, 0.0);
    }

    #[test]
    fn test_aws_services_alias_accepted() {
        let json = r#"{"strategy": "Rehost", "aws_services": ["EC2", "EBS"]}"#;
        let strategy: MigrationStrategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.recommended_services, vec!["EC2", "EBS"]);
    }

    #[test]
    fn test_cost_breakdown_round_trip() {
        let breakdown = CostBreakdown {
            projected_monthly_cost: 8600.0,
            current_monthly_cost: 12040.0,
            migration_cost: 1_200_000.0,
            savings: 3440.0,
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }
}
