//! Trading cycle and backtest flow.
//!
//! [`CycleController`] owns the periodic tick: it pulls the next price,
//! updates the window, computes indicators, asks the decision gateway and
//! publishes the result on a watch channel. [`BacktestRunner`] drives the
//! independent backtest request and its log.

mod backtest;
mod controller;
mod price;
mod state;

pub use backtest::{BacktestRunner, BacktestState};
pub use controller::{CycleConfig, CycleController, DEFAULT_INTERVAL, DEFAULT_TICKER};
pub use price::{RandomWalk, DEFAULT_INITIAL_PRICE, DEFAULT_MAX_STEP};
pub use state::{status, MonitorState};
