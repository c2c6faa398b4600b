//! Print the effective configuration as TOML.

use anyhow::Result;
use trader_config::AppConfig;

pub async fn run(config: AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
