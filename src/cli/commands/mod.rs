//! CLI command implementations.

pub mod backtest;
pub mod run;
pub mod show_config;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use trader_config::{load_config, load_from_env, AppConfig};

/// Load `path`, or defaults plus environment when the file does not exist.
pub fn resolve_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        load_config(path).with_context(|| format!("Failed to load {}", path.display()))
    } else {
        load_from_env().context("Failed to load configuration from environment")
    }
}
