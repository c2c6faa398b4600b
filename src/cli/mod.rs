//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trader_config::GatewayStrategy;

#[derive(Parser)]
#[command(name = "trader")]
#[command(author, version, about = "Simulated trading monitor driven by a streaming indicator loop")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides logging.level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the live trading cycle on simulated prices
    Run(RunArgs),
    /// Request a backtest report for a ticker
    Backtest(BacktestArgs),
    /// Validate configuration
    ValidateConfig,
    /// Print the effective configuration
    ShowConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Remote decision service over HTTP
    Remote,
    /// Local scoring model
    Local,
}

impl From<StrategyArg> for GatewayStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Remote => GatewayStrategy::Remote,
            StrategyArg::Local => GatewayStrategy::Local,
        }
    }
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Decision gateway to use
    #[arg(short, long)]
    pub strategy: Option<StrategyArg>,

    /// Ticker symbol to display
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Milliseconds between ticks
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many applied decisions
    #[arg(short = 'n', long)]
    pub ticks: Option<u64>,

    /// Seed for a reproducible price walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Decision service base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct BacktestArgs {
    /// Ticker to backtest (defaults to cycle.ticker)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Backtest service base URL
    #[arg(long)]
    pub base_url: Option<String>,
}
