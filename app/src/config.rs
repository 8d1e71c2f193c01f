//! Configuration management for the FitCalc application
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FC__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub prefill: PrefillConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Emit JSON logs instead of pretty output
    pub json: bool,
}

/// Values seeded into the form at startup
///
/// The calculator pre-fills a sample measurement and runs the BMI and
/// calorie calculations once, so the screen is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefillConfig {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: f64,
}

impl Default for PrefillConfig {
    fn default() -> Self {
        Self {
            height_cm: 170.0,
            weight_kg: 65.0,
            age_years: 25.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            prefill: PrefillConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FC__ prefix
    ///    e.g., FC__PREFILL__WEIGHT_KG=80 sets prefill.weight_kg
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("FC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
