//! Portfolio-level cost aggregation

use std::collections::HashMap;

use crate::cost::rates::CostRates;
use crate::cost::server::ServerCostCalculator;
use crate::error::AnalysisError;
use crate::models::{PortfolioCostSummary, ServerAnalysis};

/// Months in the annual and three-year savings projections
const MONTHS_PER_YEAR: f64 = 12.0;
const MONTHS_THREE_YEARS: f64 = 36.0;

/// Reduces per-server breakdowns into portfolio totals and ROI timing.
///
/// The only hard failure is an empty server list; every division in
/// the derived figures is guarded so the summary never carries NaN or
/// infinity.
#[derive(Debug, Clone, Default)]
pub struct PortfolioAggregator {
    calculator: ServerCostCalculator,
}

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self {
            calculator: ServerCostCalculator::new(),
        }
    }

    pub fn with_rates(rates: CostRates) -> Self {
        Self {
            calculator: ServerCostCalculator::with_rates(rates),
        }
    }

    /// Aggregate all per-server breakdowns into a portfolio summary
    pub fn aggregate(
        &self,
        servers: &[ServerAnalysis],
    ) -> Result<PortfolioCostSummary, AnalysisError> {
        if servers.is_empty() {
            return Err(AnalysisError::EmptyPortfolio);
        }

        let mut total_migration_cost = 0.0;
        let mut monthly_cloud_cost = 0.0;
        let mut current_costs = 0.0;
        let mut breakdowns = HashMap::with_capacity(servers.len());

        for analysis in servers {
            let breakdown = self.calculator.calculate(analysis);
            total_migration_cost += breakdown.migration_cost;
            monthly_cloud_cost += breakdown.projected_monthly_cost;
            current_costs += breakdown.current_monthly_cost;
            // duplicate server IDs overwrite, last record wins
            breakdowns.insert(analysis.server.server_id.clone(), breakdown);
        }

        let monthly_savings = current_costs - monthly_cloud_cost;

        let roi_months = if monthly_savings > 0.0 {
            (total_migration_cost / monthly_savings).ceil() as u32
        } else {
            0
        };

        let cost_reduction_percent = if current_costs > 0.0 {
            (current_costs - monthly_cloud_cost) / current_costs * 100.0
        } else {
            0.0
        };

        Ok(PortfolioCostSummary {
            total_migration_cost,
            monthly_cloud_cost,
            current_costs,
            monthly_savings,
            roi_months,
            annual_savings: monthly_savings * MONTHS_PER_YEAR,
            three_year_savings: monthly_savings * MONTHS_THREE_YEARS - total_migration_cost,
            cost_reduction_percent,
            servers: breakdowns,
        })
    }
}
