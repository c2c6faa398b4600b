//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, BacktestSettings, CycleSettings, GatewaySettings, GatewayStrategy,
    LoggingConfig,
};

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix, e.g. `TRADER__CYCLE__TICKER`.
pub const ENV_PREFIX: &str = "TRADER";

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder().add_source(File::from(path).required(true));
    finish(builder.add_source(environment()))
}

/// Load defaults overridden by environment only, for runs without a file.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    finish(Config::builder().add_source(environment()))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate().map_err(ConfigError::Message)?;
    Ok(config)
}
