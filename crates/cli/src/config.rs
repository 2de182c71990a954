//! Configuration management for the CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default currency code for displayed amounts
pub const DEFAULT_CURRENCY: &str = "INR";

/// CLI configuration, stored at `~/.config/mca/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API endpoint URL
    pub api_url: Option<String>,
    /// Currency code used when formatting amounts
    pub currency: Option<String>,
}

impl Config {
    /// Load configuration from file; missing file means defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Currency code to display, falling back to the default
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("mca").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_currency() {
        let config = Config::default();
        assert_eq!(config.currency(), "INR");
    }

    #[test]
    fn test_currency_override() {
        let config = Config {
            api_url: None,
            currency: Some("USD".to_string()),
        };
        assert_eq!(config.currency(), "USD");
    }
}
