//! Configuration management for the Inventory Analytics Service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with IVA_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::analytics::VelocityThresholds;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Tunable analytics thresholds
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL for the read-only fact store
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Row cap applied to tiered/detail views when no explicit limit is given
    pub default_result_cap: usize,

    /// sold_30d at or above this marks a fast mover
    pub velocity_fast_sold_30d: u32,

    /// sold_30d at or below this (with any 90-day sales) marks a slow mover
    pub velocity_slow_sold_30d: u32,
}

impl AnalyticsConfig {
    pub fn velocity_thresholds(&self) -> VelocityThresholds {
        VelocityThresholds {
            fast_sold_30d: Decimal::from(self.velocity_fast_sold_30d),
            slow_sold_30d: Decimal::from(self.velocity_slow_sold_30d),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("IVA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("analytics.default_result_cap", 200)?
            .set_default("analytics.velocity_fast_sold_30d", 60)?
            .set_default("analytics.velocity_slow_sold_30d", 6)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (IVA_ prefix)
            .add_source(
                Environment::with_prefix("IVA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
