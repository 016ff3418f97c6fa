//! # Configuration
//!
//! TOML settings for the delivery system. Every field has a default, so an empty
//! file (or no file) yields a working setup with planar distances and the
//! standard rate table.
//!
//! ```toml
//! log_level = "info"
//! channel_buffer = 32
//!
//! [pricing]
//! distance = "planar"
//!
//! [pricing.rates]
//! standard = 2.5
//! lite = 1.5
//! universal = 3.0
//!
//! [[addresses]]
//! name = "Depot"
//! latitude = 0.0
//! longitude = 0.0
//! ```

use crate::model::{Coordinate, OrderType};
use crate::pricing::{DistanceStrategy, Pricing, RateTable};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    pub pricing: PricingConfig,
    /// Entries registered in the address directory at startup.
    pub addresses: Vec<AddressSeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            channel_buffer: 32,
            pricing: PricingConfig::default(),
            addresses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub distance: DistanceStrategy,
    pub rates: RatesConfig,
}

impl PricingConfig {
    pub fn build(&self) -> Pricing {
        Pricing::new(self.distance, self.rates.to_table())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatesConfig {
    pub standard: f64,
    pub lite: f64,
    pub universal: f64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            standard: 2.5,
            lite: 1.5,
            universal: 3.0,
        }
    }
}

impl RatesConfig {
    fn entries(&self) -> [(OrderType, f64); 3] {
        [
            (OrderType::Standard, self.standard),
            (OrderType::Lite, self.lite),
            (OrderType::Universal, self.universal),
        ]
    }

    pub fn to_table(&self) -> RateTable {
        RateTable::new(self.entries())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressSeed {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AddressSeed {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Config {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path).await?;
        contents.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Validation(
                "channel_buffer must be greater than zero".into(),
            ));
        }

        for (order_type, rate) in self.pricing.rates.entries() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "rate for {} must be a non-negative number, got {}",
                    order_type, rate
                )));
            }
        }

        let mut names = HashSet::new();
        for seed in &self.addresses {
            if seed.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "address name cannot be empty".into(),
                ));
            }
            if !seed.location().is_valid() {
                return Err(ConfigError::Validation(format!(
                    "address {} has invalid coordinates ({}, {})",
                    seed.name, seed.latitude, seed.longitude
                )));
            }
            if !names.insert(seed.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate address name: {}",
                    seed.name
                )));
            }
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pricing.distance, DistanceStrategy::Planar);
        assert_eq!(config.pricing.rates.to_table(), RateTable::default());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            log_level = "debug"
            channel_buffer = 8

            [pricing]
            distance = "haversine"

            [pricing.rates]
            standard = 4.0

            [[addresses]]
            name = "Depot"
            latitude = 0.0
            longitude = 0.0

            [[addresses]]
            name = "Harbor"
            latitude = 3.0
            longitude = 4.0
        "#
        .parse()
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.pricing.distance, DistanceStrategy::Haversine);
        assert_eq!(config.pricing.rates.standard, 4.0);
        assert_eq!(config.pricing.rates.lite, 1.5);
        assert_eq!(config.addresses.len(), 2);
        assert_eq!(config.addresses[1].location(), Coordinate::new(3.0, 4.0));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            "channel_buffer = 0",
            "[pricing.rates]\nlite = -1.0",
            "[pricing.rates]\nuniversal = nan",
            "[[addresses]]\nname = \"A\"\nlatitude = 95.0\nlongitude = 0.0",
            "[[addresses]]\nname = \"\"\nlatitude = 0.0\nlongitude = 0.0",
            "[[addresses]]\nname = \"A\"\nlatitude = 0.0\nlongitude = 0.0\n\
             [[addresses]]\nname = \"A\"\nlatitude = 1.0\nlongitude = 1.0",
        ];
        for case in cases {
            assert!(
                matches!(case.parse::<Config>(), Err(ConfigError::Validation(_))),
                "accepted: {case}"
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "[pricing]\ndistance = \"manhattan\"".parse::<Config>(),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            "channel_buffer = \"many\"".parse::<Config>(),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            "unknown_key = 1".parse::<Config>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "channel_buffer = 4\n[pricing]\ndistance = \"planar\"").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.channel_buffer, 4);

        let missing = Config::from_file("/definitely/not/here.toml").await;
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
