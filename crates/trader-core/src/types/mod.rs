//! Core data types for the trading monitor.

mod backtest;
mod cycle;
mod decision;
mod snapshot;
mod window;

pub use backtest::{BacktestLog, BacktestReport, LogEntry, DEFAULT_LOG_CAPACITY};
pub use cycle::CycleState;
pub use decision::{Decision, DecisionOutcome};
pub use snapshot::{IndicatorSnapshot, MA_SENTINEL, RSI_SENTINEL};
pub use window::{PriceWindow, WindowView, WINDOW_CAPACITY};
