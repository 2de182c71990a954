//! Rate tables and cost formulas
//!
//! Lookup tables over the closed strategy/complexity enumerations plus
//! the three metric cost formulas. Unknown keys fall back to a
//! baseline instead of erroring; negative or non-finite metric values
//! clamp to zero so the engine never emits NaN.

use crate::models::{CapacityMetrics, ComplexityLevel, CpuMetrics, NetworkUtilization, StrategyKind};

/// Default monthly cost per CPU core at full utilization
pub const DEFAULT_COST_PER_CORE: f64 = 3000.0;

/// Default monthly cost per GB of provisioned storage
pub const DEFAULT_COST_PER_GB_STORAGE: f64 = 100.0;

/// Default cost per GB of consumed bandwidth
pub const DEFAULT_COST_PER_GB_BANDWIDTH: f64 = 50.0;

/// Assumed on-premises cost relative to the cloud projection
pub const DEFAULT_ON_PREMISE_MARKUP: f64 = 1.4;

/// Kibibytes per gibibyte; discovery reports capacities in KB
const KB_PER_GB: f64 = 1024.0 * 1024.0;

const REHOST_BASELINE: f64 = 500_000.0;
const REPLATFORM_BASELINE: f64 = 1_000_000.0;
const REFACTOR_BASELINE: f64 = 2_000_000.0;

/// Baseline migration cost for a strategy.
///
/// Unknown strategies take the Rehost value, a deliberate default
/// rather than an error.
pub fn baseline_migration_cost(kind: StrategyKind) -> f64 {
    match kind {
        StrategyKind::Rehost => REHOST_BASELINE,
        StrategyKind::Replatform => REPLATFORM_BASELINE,
        StrategyKind::Refactor => REFACTOR_BASELINE,
        StrategyKind::Unknown => REHOST_BASELINE,
    }
}

/// Cost multiplier for a complexity level; unknown levels multiply by 1.0
pub fn complexity_multiplier(level: ComplexityLevel) -> f64 {
    match level {
        ComplexityLevel::High => 1.5,
        ComplexityLevel::Medium => 1.2,
        ComplexityLevel::Low => 1.0,
        ComplexityLevel::Unknown => 1.0,
    }
}

/// Clamp malformed metric values to zero (never NaN downstream)
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Configurable rate constants for a deployment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRates {
    pub cost_per_core: f64,
    pub cost_per_gb: f64,
    pub cost_per_gb_bandwidth: f64,
    pub on_premise_markup: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            cost_per_core: DEFAULT_COST_PER_CORE,
            cost_per_gb: DEFAULT_COST_PER_GB_STORAGE,
            cost_per_gb_bandwidth: DEFAULT_COST_PER_GB_BANDWIDTH,
            on_premise_markup: DEFAULT_ON_PREMISE_MARKUP,
        }
    }
}

impl CostRates {
    /// Monthly compute cost: `cores × cost_per_core × (utilization / 100)`.
    /// Zero cores or zero utilization legitimately yields zero.
    pub fn compute_cost(&self, cpu: &CpuMetrics) -> f64 {
        sanitize(cpu.cores) * self.cost_per_core * (sanitize(cpu.utilization) / 100.0)
    }

    /// Monthly storage cost from total provisioned capacity (KB in, GB billed)
    pub fn storage_cost(&self, storage: &CapacityMetrics) -> f64 {
        sanitize(storage.total) / KB_PER_GB * self.cost_per_gb
    }

    /// Monthly network cost from bandwidth and average usage
    pub fn network_cost(&self, network: &NetworkUtilization) -> f64 {
        sanitize(network.bandwidth) * (sanitize(network.average_usage) / 100.0)
            * self.cost_per_gb_bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_costs_per_strategy() {
        assert_eq!(baseline_migration_cost(StrategyKind::Rehost), 500_000.0);
        assert_eq!(baseline_migration_cost(StrategyKind::Replatform), 1_000_000.0);
        assert_eq!(baseline_migration_cost(StrategyKind::Refactor), 2_000_000.0);
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_rehost() {
        assert_eq!(
            baseline_migration_cost(StrategyKind::Unknown),
            baseline_migration_cost(StrategyKind::Rehost)
        );
    }

    #[test]
    fn test_complexity_multipliers() {
        assert_eq!(complexity_multiplier(ComplexityLevel::High), 1.5);
        assert_eq!(complexity_multiplier(ComplexityLevel::Medium), 1.2);
        assert_eq!(complexity_multiplier(ComplexityLevel::Low), 1.0);
    }

    #[test]
    fn test_unknown_level_multiplies_by_one() {
        assert_eq!(complexity_multiplier(ComplexityLevel::Unknown), 1.0);
    }

    #[test]
    fn test_compute_cost_formula() {
        let rates = CostRates::default();
        let cpu = CpuMetrics {
            cores: 4.0,
            utilization: 50.0,
        };
        assert_eq!(rates.compute_cost(&cpu), 6000.0);
    }

    #[test]
    fn test_compute_cost_zero_cases() {
        let rates = CostRates::default();
        let idle = CpuMetrics {
            cores: 8.0,
            utilization: 0.0,
        };
        assert_eq!(rates.compute_cost(&idle), 0.0);
        let coreless = CpuMetrics {
            cores: 0.0,
            utilization: 75.0,
        };
        assert_eq!(rates.compute_cost(&coreless), 0.0);
    }

    #[test]
    fn test_storage_cost_converts_kb_to_gb() {
        let rates = CostRates::default();
        let storage = CapacityMetrics {
            total: 1_048_576.0, // 1 GB in KB
            used: 0.0,
        };
        assert_eq!(rates.storage_cost(&storage), 100.0);
    }

    #[test]
    fn test_network_cost_formula() {
        let rates = CostRates::default();
        let network = NetworkUtilization {
            bandwidth: 100.0,
            average_usage: 50.0,
        };
        assert_eq!(rates.network_cost(&network), 2500.0);
    }

    #[test]
    fn test_malformed_values_clamp_to_zero() {
        let rates = CostRates::default();
        let cpu = CpuMetrics {
            cores: -4.0,
            utilization: f64::NAN,
        };
        assert_eq!(rates.compute_cost(&cpu), 0.0);

        let storage = CapacityMetrics {
            total: f64::INFINITY,
            used: 0.0,
        };
        assert_eq!(rates.storage_cost(&storage), 0.0);
    }

    #[test]
    fn test_rate_overrides_respected() {
        let rates = CostRates {
            cost_per_core: 100.0,
            ..CostRates::default()
        };
        let cpu = CpuMetrics {
            cores: 2.0,
            utilization: 100.0,
        };
        assert_eq!(rates.compute_cost(&cpu), 200.0);
    }
}
