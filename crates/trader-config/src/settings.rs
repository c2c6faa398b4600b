//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use trader_indicators::IndicatorPeriods;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cycle: CycleSettings,
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub backtest: BacktestSettings,
}

impl AppConfig {
    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), String> {
        if self.cycle.ticker.trim().is_empty() {
            return Err("cycle.ticker must not be empty".into());
        }
        if self.cycle.interval_ms == 0 {
            return Err("cycle.interval_ms must be greater than 0".into());
        }
        if self.cycle.ma_period == 0 || self.cycle.rsi_period == 0 {
            return Err("cycle.ma_period and cycle.rsi_period must be greater than 0".into());
        }
        if self.cycle.max_step.is_nan() || self.cycle.max_step <= 0.0 {
            return Err("cycle.max_step must be greater than 0".into());
        }
        if !(0.0..=1.0).contains(&self.gateway.threshold) {
            return Err("gateway.threshold must be within 0..=1".into());
        }
        if self.gateway.timeout_ms == 0 || self.backtest.timeout_ms == 0 {
            return Err("timeouts must be greater than 0".into());
        }
        if self.backtest.log_capacity == 0 {
            return Err("backtest.log_capacity must be greater than 0".into());
        }
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "trader".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Trading cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleSettings {
    pub ticker: String,
    pub interval_ms: u64,
    pub initial_price: f64,
    pub max_step: f64,
    pub ma_period: usize,
    pub rsi_period: usize,
    /// Seed for a reproducible price walk
    pub seed: Option<u64>,
}

impl CycleSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn periods(&self) -> IndicatorPeriods {
        IndicatorPeriods {
            moving_average: self.ma_period,
            rsi: self.rsi_period,
        }
    }
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            interval_ms: 2000,
            initial_price: 150.0,
            max_step: 2.5,
            ma_period: 10,
            rsi_period: 14,
            seed: None,
        }
    }
}

/// Which decision gateway drives the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStrategy {
    #[default]
    Remote,
    Local,
}

/// Decision gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    pub strategy: GatewayStrategy,
    pub base_url: String,
    pub timeout_ms: u64,
    /// Minimum class probability for the local model to act
    pub threshold: f64,
    /// Weights file for the local model
    pub model_path: Option<PathBuf>,
    pub model_seed: Option<u64>,
}

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            strategy: GatewayStrategy::Remote,
            base_url: "http://localhost:5000/api".to_string(),
            timeout_ms: 5000,
            threshold: 0.7,
            model_path: None,
            model_seed: None,
        }
    }
}

/// Backtest request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestSettings {
    pub timeout_ms: u64,
    pub log_capacity: usize,
}

impl BacktestSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            log_capacity: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cycle.interval(), Duration::from_secs(2));
        assert_eq!(config.cycle.periods(), IndicatorPeriods::default());
    }

    #[test]
    fn test_roundtrips_through_toml() {
        let text = toml::to_string(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.gateway.base_url, "http://localhost:5000/api");
        assert_eq!(parsed.backtest.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_strategy_names() {
        let settings: GatewaySettings = toml::from_str("strategy = \"local\"").unwrap();
        assert_eq!(settings.strategy, GatewayStrategy::Local);
        assert!(toml::from_str::<GatewaySettings>("strategy = \"cloud\"").is_err());
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let mut config = AppConfig::default();
        config.cycle.ticker = " ".into();
        assert!(config.validate().is_err());
    }
}
