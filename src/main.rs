//! Trading monitor CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use trader_config::AppConfig;
use trader_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // validate-config reports load errors itself
    let config = match cli.command {
        Commands::ValidateConfig => AppConfig::default(),
        _ => cli::commands::resolve_config(&cli.config)?,
    };

    // Setup logging; the guard flushes the log file on exit
    let level = cli
        .log_level
        .map_or(config.logging.level.as_str(), |l| l.as_str());
    let json = cli.json_logs || config.logging.is_json();
    let _guard = setup_logging(level, json, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, config).await,
        Commands::Backtest(args) => cli::commands::backtest::run(args, config).await,
        Commands::ShowConfig => cli::commands::show_config::run(config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
