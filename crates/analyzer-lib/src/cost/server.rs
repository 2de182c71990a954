//! Per-server cost breakdown

use crate::cost::rates::{baseline_migration_cost, complexity_multiplier, CostRates};
use crate::models::{CostBreakdown, ServerAnalysis};

/// Derives one [`CostBreakdown`] per server from its metrics,
/// recommended strategy, and complexity level.
///
/// Calculation never fails: malformed metrics clamp to zero in the
/// rate formulas, and negative savings are a valid, reportable
/// outcome.
#[derive(Debug, Clone, Default)]
pub struct ServerCostCalculator {
    rates: CostRates,
}

impl ServerCostCalculator {
    pub fn new() -> Self {
        Self {
            rates: CostRates::default(),
        }
    }

    pub fn with_rates(rates: CostRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Compute the full cost breakdown for one analyzed server
    pub fn calculate(&self, analysis: &ServerAnalysis) -> CostBreakdown {
        let metrics = &analysis.server.metrics;

        let projected_monthly_cost = self.rates.compute_cost(&metrics.cpu)
            + self.rates.storage_cost(&metrics.storage)
            + self.rates.network_cost(&metrics.network_utilization);

        let current_monthly_cost = projected_monthly_cost * self.rates.on_premise_markup;

        let migration_cost = baseline_migration_cost(analysis.strategy.kind)
            * complexity_multiplier(analysis.complexity.level);

        CostBreakdown {
            projected_monthly_cost,
            current_monthly_cost,
            migration_cost,
            savings: current_monthly_cost - projected_monthly_cost,
        }
    }
}
