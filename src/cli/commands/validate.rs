//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use trader_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Ticker: {}", config.cycle.ticker);
            println!("Tick interval: {} ms", config.cycle.interval_ms);
            println!(
                "Indicators: MA({}) RSI({})",
                config.cycle.ma_period, config.cycle.rsi_period
            );
            println!("Gateway: {:?}", config.gateway.strategy);
            println!("Decision service: {}", config.gateway.base_url);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
