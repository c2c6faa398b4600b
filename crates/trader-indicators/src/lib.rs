//! Technical indicators for the trading cycle.
//!
//! This crate provides the two indicators the decision gateway consumes:
//! - Simple moving average over the most recent prices
//! - Relative strength index from simple average gains and losses
//!
//! Both are pure functions of the window and report `None` while the
//! window is too short.

pub mod engine;
pub mod momentum;
pub mod moving_average;

pub use engine::{IndicatorEngine, IndicatorPeriods};
pub use momentum::{rsi, Rsi, DEFAULT_RSI_PERIOD};
pub use moving_average::{moving_average, Sma, DEFAULT_MA_PERIOD};
