//! API server configuration

use analyzer_lib::cost::{
    CostRates, DEFAULT_COST_PER_CORE, DEFAULT_COST_PER_GB_BANDWIDTH, DEFAULT_COST_PER_GB_STORAGE,
    DEFAULT_ON_PREMISE_MARKUP,
};
use anyhow::Result;
use serde::Deserialize;

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Monthly cost per CPU core at full utilization
    #[serde(default = "default_cost_per_core")]
    pub cost_per_core: f64,

    /// Monthly cost per GB of provisioned storage
    #[serde(default = "default_cost_per_gb")]
    pub cost_per_gb: f64,

    /// Cost per GB of consumed bandwidth
    #[serde(default = "default_cost_per_gb_bandwidth")]
    pub cost_per_gb_bandwidth: f64,

    /// Assumed on-premises cost relative to the cloud projection
    #[serde(default = "default_on_premise_markup")]
    pub on_premise_markup: f64,
}

fn default_api_port() -> u16 {
    8080
}

fn default_cost_per_core() -> f64 {
    DEFAULT_COST_PER_CORE
}

fn default_cost_per_gb() -> f64 {
    DEFAULT_COST_PER_GB_STORAGE
}

fn default_cost_per_gb_bandwidth() -> f64 {
    DEFAULT_COST_PER_GB_BANDWIDTH
}

fn default_on_premise_markup() -> f64 {
    DEFAULT_ON_PREMISE_MARKUP
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            cost_per_core: default_cost_per_core(),
            cost_per_gb: default_cost_per_gb(),
            cost_per_gb_bandwidth: default_cost_per_gb_bandwidth(),
            on_premise_markup: default_on_premise_markup(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment (`ANALYZER_*` variables)
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("ANALYZER"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }

    /// Deployment rate overrides as engine rates
    pub fn rates(&self) -> CostRates {
        CostRates {
            cost_per_core: self.cost_per_core,
            cost_per_gb: self.cost_per_gb,
            cost_per_gb_bandwidth: self.cost_per_gb_bandwidth,
            on_premise_markup: self.on_premise_markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_rates() {
        let config = ApiConfig::default();
        assert_eq!(config.rates(), CostRates::default());
        assert_eq!(config.api_port, 8080);
    }
}
