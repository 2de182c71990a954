//! Complexity assessment and strategy suggestion
//!
//! Scores six factors of a discovered server (CPU, memory, storage,
//! network usage, dependency and application counts) on an 18-point
//! scale, maps the score to a Low/Medium/High level, and recommends a
//! migration strategy per level. This is the upstream producer of the
//! [`ServerAnalysis`] values the cost engine consumes.

use std::collections::HashMap;

use crate::models::{
    ComplexityAssessment, ComplexityLevel, MigrationStrategy, ServerAnalysis, ServerRecord,
    StrategyKind,
};

/// Maximum attainable factor-point total (six factors, 3 points each)
pub const MAX_COMPLEXITY_SCORE: f64 = 18.0;

/// Percentage above which a server is High complexity
const HIGH_THRESHOLD: f64 = 70.0;

/// Percentage above which a server is Medium complexity
const MEDIUM_THRESHOLD: f64 = 40.0;

/// Points for a utilization percentage: heavy use migrates harder
fn utilization_points(percentage: f64) -> f64 {
    if percentage > 80.0 {
        3.0
    } else if percentage > 60.0 {
        2.0
    } else {
        1.0
    }
}

/// Points for a dependency or application count, capped at 3
fn count_points(count: usize) -> f64 {
    ((count / 2) as f64).min(3.0)
}

/// Used/total as a percentage, zero when total is zero
fn usage_percentage(used: f64, total: f64) -> f64 {
    if total > 0.0 {
        used / total * 100.0
    } else {
        0.0
    }
}

/// Assess the migration complexity of a single server
pub fn assess(record: &ServerRecord) -> ComplexityAssessment {
    let metrics = &record.metrics;

    let cpu_utilization = metrics.cpu.utilization;
    let memory_utilization = usage_percentage(metrics.memory.used, metrics.memory.total);
    let storage_utilization = usage_percentage(metrics.storage.used, metrics.storage.total);
    let network_usage = metrics.network_utilization.average_usage;

    let score = utilization_points(cpu_utilization)
        + utilization_points(memory_utilization)
        + utilization_points(storage_utilization)
        + utilization_points(network_usage)
        + count_points(record.dependencies.len())
        + count_points(record.applications.len());

    let percentage = score / MAX_COMPLEXITY_SCORE * 100.0;

    let level = if percentage > HIGH_THRESHOLD {
        ComplexityLevel::High
    } else if percentage > MEDIUM_THRESHOLD {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    };

    let factors = HashMap::from([
        ("cpu".to_string(), cpu_utilization),
        ("memory".to_string(), memory_utilization),
        ("storage".to_string(), storage_utilization),
        ("network".to_string(), network_usage),
        (
            "dependencies".to_string(),
            record.dependencies.len() as f64,
        ),
        (
            "applications".to_string(),
            record.applications.len() as f64,
        ),
    ]);

    ComplexityAssessment {
        level,
        percentage,
        score,
        factors,
    }
}

/// Recommend a migration strategy for a complexity level
pub fn suggest_strategy(level: ComplexityLevel) -> MigrationStrategy {
    match level {
        ComplexityLevel::Low => MigrationStrategy {
            kind: StrategyKind::Rehost,
            description:
                "Lift-and-shift migration recommended due to low complexity and minimal dependencies."
                    .to_string(),
            recommended_services: vec![
                "Application Migration Service".to_string(),
                "Compute Instances".to_string(),
                "Block Storage".to_string(),
                "Virtual Network".to_string(),
            ],
        },
        ComplexityLevel::Medium => MigrationStrategy {
            kind: StrategyKind::Replatform,
            description:
                "Modify and optimize applications during migration for better cloud-native compatibility."
                    .to_string(),
            recommended_services: vec![
                "Application Migration Service".to_string(),
                "Compute Instances".to_string(),
                "Managed Database".to_string(),
                "Container Service".to_string(),
                "Auto Scaling".to_string(),
                "Load Balancing".to_string(),
            ],
        },
        ComplexityLevel::High | ComplexityLevel::Unknown => MigrationStrategy {
            kind: StrategyKind::Refactor,
            description:
                "Significant re-architecture recommended to fully leverage cloud-native capabilities."
                    .to_string(),
            recommended_services: vec![
                "Container Service".to_string(),
                "Kubernetes Service".to_string(),
                "Serverless Functions".to_string(),
                "Managed Database".to_string(),
                "Key-Value Store".to_string(),
                "API Gateway".to_string(),
                "CDN".to_string(),
            ],
        },
    }
}

/// Build engine-ready analyses from raw discovery records
pub fn assess_inventory(records: Vec<ServerRecord>) -> Vec<ServerAnalysis> {
    records
        .into_iter()
        .map(|server| {
            let complexity = assess(&server);
            let strategy = suggest_strategy(complexity.level);
            ServerAnalysis {
                server,
                strategy,
                complexity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CapacityMetrics, CpuMetrics, NetworkUtilization, ServerMetrics};

    fn record(
        cpu_util: f64,
        mem_used: f64,
        storage_used: f64,
        net_usage: f64,
        dependencies: usize,
        applications: usize,
    ) -> ServerRecord {
        ServerRecord {
            server_id: "srv-1".to_string(),
            server_name: "host".to_string(),
            applications: (0..applications).map(|i| format!("app-{i}")).collect(),
            dependencies: (0..dependencies).map(|i| format!("dep-{i}")).collect(),
            metrics: ServerMetrics {
                cpu: CpuMetrics {
                    cores: 4.0,
                    utilization: cpu_util,
                },
                memory: CapacityMetrics {
                    total: 100.0,
                    used: mem_used,
                },
                storage: CapacityMetrics {
                    total: 100.0,
                    used: storage_used,
                },
                network_utilization: NetworkUtilization {
                    bandwidth: 100.0,
                    average_usage: net_usage,
                },
            },
        }
    }

    #[test]
    fn test_quiet_server_is_low_complexity() {
        // four utilization factors at 1 point, no deps or apps: 4/18
        let assessment = assess(&record(10.0, 10.0, 10.0, 10.0, 0, 0));
        assert_eq!(assessment.level, ComplexityLevel::Low);
        assert_eq!(assessment.score, 4.0);
    }

    #[test]
    fn test_saturated_server_is_high_complexity() {
        let assessment = assess(&record(95.0, 95.0, 95.0, 95.0, 8, 8));
        assert_eq!(assessment.level, ComplexityLevel::High);
        assert_eq!(assessment.score, MAX_COMPLEXITY_SCORE);
        assert_eq!(assessment.percentage, 100.0);
    }

    #[test]
    fn test_medium_band_between_thresholds() {
        // 2+2+2+2 utilization points, 1 dep point, 0 app points: 9/18 = 50%
        let assessment = assess(&record(70.0, 70.0, 70.0, 70.0, 2, 0));
        assert_eq!(assessment.score, 9.0);
        assert_eq!(assessment.level, ComplexityLevel::Medium);
    }

    #[test]
    fn test_zero_capacity_guards_division() {
        let mut server = record(50.0, 0.0, 0.0, 50.0, 0, 0);
        server.metrics.memory.total = 0.0;
        server.metrics.storage.total = 0.0;

        let assessment = assess(&server);
        assert!(assessment.percentage.is_finite());
        assert_eq!(assessment.factors["memory"], 0.0);
        assert_eq!(assessment.factors["storage"], 0.0);
    }

    #[test]
    fn test_count_points_capped() {
        assert_eq!(count_points(0), 0.0);
        assert_eq!(count_points(2), 1.0);
        assert_eq!(count_points(6), 3.0);
        assert_eq!(count_points(40), 3.0);
    }

    #[test]
    fn test_strategy_per_level() {
        assert_eq!(
            suggest_strategy(ComplexityLevel::Low).kind,
            StrategyKind::Rehost
        );
        assert_eq!(
            suggest_strategy(ComplexityLevel::Medium).kind,
            StrategyKind::Replatform
        );
        assert_eq!(
            suggest_strategy(ComplexityLevel::High).kind,
            StrategyKind::Refactor
        );
    }

    #[test]
    fn test_assess_inventory_builds_analyses() {
        let analyses = assess_inventory(vec![
            record(10.0, 10.0, 10.0, 10.0, 0, 0),
            record(95.0, 95.0, 95.0, 95.0, 8, 8),
        ]);

        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].strategy.kind, StrategyKind::Rehost);
        assert_eq!(analyses[1].strategy.kind, StrategyKind::Refactor);
        assert!(!analyses[1].strategy.recommended_services.is_empty());
    }
}
