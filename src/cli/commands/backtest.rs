//! Backtest command implementation.

use anyhow::{Context, Result};
use std::sync::Arc;
use trader_config::AppConfig;
use trader_engine::BacktestRunner;
use trader_gateway::HttpBacktestService;
use trader_monitor::render_backtest;
use tracing::info;

use crate::cli::{BacktestArgs, OutputFormat};

pub async fn run(args: BacktestArgs, config: AppConfig) -> Result<()> {
    let ticker = args.ticker.unwrap_or_else(|| config.cycle.ticker.clone());
    let base_url = args.base_url.unwrap_or_else(|| config.gateway.base_url.clone());

    let service = HttpBacktestService::new(base_url, config.backtest.timeout())
        .context("Failed to create backtest client")?;
    let runner = BacktestRunner::new(Arc::new(service), config.backtest.log_capacity);

    info!("Starting backtest for ticker: {}", ticker);
    let result = runner.run(&ticker).await;

    match (&result, args.output) {
        (Ok(report), OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(report)?),
        _ => {
            for line in render_backtest(&runner.current()) {
                println!("{}", line);
            }
        }
    }

    result.map(|_| ()).context("Backtest failed")
}
