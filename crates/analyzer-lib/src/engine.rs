//! Analysis engine façade
//!
//! Ties the cost aggregator and roadmap summarizer together into one
//! pure call: input in, report out. The engine holds no state between
//! invocations and is safe to call concurrently.

use crate::cost::{CostRates, PortfolioAggregator};
use crate::error::AnalysisError;
use crate::models::{AnalysisInput, AnalysisReport};
use crate::roadmap;

/// Analyze an inventory with the default deployment rates
pub fn analyze(input: &AnalysisInput) -> Result<AnalysisReport, AnalysisError> {
    analyze_with_rates(input, CostRates::default())
}

/// Analyze an inventory with deployment-specific rate overrides
pub fn analyze_with_rates(
    input: &AnalysisInput,
    rates: CostRates,
) -> Result<AnalysisReport, AnalysisError> {
    let portfolio = PortfolioAggregator::with_rates(rates).aggregate(&input.servers)?;

    let total_servers = input.servers.len();
    let average_complexity_score = input
        .servers
        .iter()
        .map(|s| s.complexity.percentage)
        .filter(|p| p.is_finite())
        .sum::<f64>()
        / total_servers as f64;

    let roadmap = input
        .roadmap
        .as_ref()
        .map(|r| roadmap::summarize(&r.timeline, &r.project_summary));

    Ok(AnalysisReport {
        total_servers,
        average_complexity_score,
        portfolio,
        roadmap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ComplexityAssessment, ComplexityLevel, CpuMetrics, MigrationStrategy, ProjectSummary,
        RoadmapInput, RoadmapPhase, ServerAnalysis, ServerRecord, StrategyKind,
    };

    fn server(id: &str, percentage: f64) -> ServerAnalysis {
        let mut analysis = ServerAnalysis {
            server: ServerRecord {
                server_id: id.to_string(),
                server_name: format!("{id}-host"),
                ..ServerRecord::default()
            },
            strategy: MigrationStrategy {
                kind: StrategyKind::Rehost,
                ..MigrationStrategy::default()
            },
            complexity: ComplexityAssessment {
                level: ComplexityLevel::Low,
                percentage,
                ..ComplexityAssessment::default()
            },
        };
        analysis.server.metrics.cpu = CpuMetrics {
            cores: 4.0,
            utilization: 50.0,
        };
        analysis
    }

    fn roadmap_input() -> RoadmapInput {
        RoadmapInput {
            project_summary: ProjectSummary {
                duration: String::new(),
                total_effort: 320.0,
                start_date: "2026-01-05".to_string(),
                end_date: "2026-03-09".to_string(),
            },
            timeline: vec![RoadmapPhase {
                name: "Assessment".to_string(),
                start_date: "2026-01-05".to_string(),
                end_date: "2026-03-09".to_string(),
                ..RoadmapPhase::default()
            }],
        }
    }

    #[test]
    fn test_empty_inventory_fails() {
        let input = AnalysisInput::default();
        assert_eq!(
            analyze(&input).unwrap_err(),
            AnalysisError::EmptyPortfolio
        );
    }

    #[test]
    fn test_report_counts_and_average() {
        let input = AnalysisInput {
            servers: vec![server("srv-1", 40.0), server("srv-2", 60.0)],
            roadmap: None,
        };
        let report = analyze(&input).unwrap();

        assert_eq!(report.total_servers, 2);
        assert!((report.average_complexity_score - 50.0).abs() < 1e-9);
        assert!(report.roadmap.is_none());
    }

    #[test]
    fn test_roadmap_present_when_supplied() {
        let input = AnalysisInput {
            servers: vec![server("srv-1", 40.0)],
            roadmap: Some(roadmap_input()),
        };
        let report = analyze(&input).unwrap();

        let roadmap = report.roadmap.unwrap();
        assert!(roadmap.available);
        assert_eq!(roadmap.phases.len(), 1);
        assert!(roadmap.phases[0].is_final);
    }

    #[test]
    fn test_empty_timeline_degrades_to_unavailable() {
        let mut input = AnalysisInput {
            servers: vec![server("srv-1", 40.0)],
            roadmap: Some(roadmap_input()),
        };
        input.roadmap.as_mut().unwrap().timeline.clear();

        let report = analyze(&input).unwrap();
        assert!(!report.roadmap.unwrap().available);
    }

    #[test]
    fn test_report_round_trip() {
        let input = AnalysisInput {
            servers: vec![server("srv-1", 40.0)],
            roadmap: Some(roadmap_input()),
        };
        let report = analyze(&input).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let input = AnalysisInput {
            servers: vec![server("srv-1", 40.0), server("srv-2", 60.0)],
            roadmap: None,
        };
        let first = analyze(&input).unwrap();
        let second = analyze(&input).unwrap();
        assert_eq!(first, second);
    }
}
