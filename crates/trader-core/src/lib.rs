//! Core types and traits for the trading monitor.
//!
//! This crate provides the foundational building blocks including:
//! - The bounded price window and indicator snapshots
//! - Trading decisions and cycle state
//! - Backtest report and log types
//! - Capability traits for decision gateways, price sources and indicators

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BacktestError, TraderError, TraderResult, TransportError};
pub use traits::*;
pub use types::*;
