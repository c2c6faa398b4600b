//! Core traits for the trading monitor.

mod backtest;
mod gateway;
mod indicator;
mod price_source;

pub use backtest::BacktestService;
pub use gateway::DecisionGateway;
pub use indicator::Indicator;
pub use price_source::PriceSource;
