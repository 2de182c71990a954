//! Cost & ROI derivation
//!
//! Pure, stateless computations: rate tables and formulas
//! ([`rates`]), per-server breakdowns ([`server`]), and portfolio
//! aggregation ([`portfolio`]). No component retains state between
//! calls, so concurrent invocations are safe.

mod portfolio;
mod rates;
mod server;

pub use portfolio::PortfolioAggregator;
pub use rates::{
    baseline_migration_cost, complexity_multiplier, CostRates, DEFAULT_COST_PER_CORE,
    DEFAULT_COST_PER_GB_BANDWIDTH, DEFAULT_COST_PER_GB_STORAGE, DEFAULT_ON_PREMISE_MARKUP,
};
pub use server::ServerCostCalculator;
