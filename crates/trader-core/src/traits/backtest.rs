//! Backtest service trait definition.

use crate::error::TransportError;
use crate::types::BacktestReport;
use async_trait::async_trait;

/// Service that analyses a ticker and returns a hedging recommendation.
#[async_trait]
pub trait BacktestService: Send + Sync {
    /// Request a backtest for `ticker`.
    async fn backtest(&self, ticker: &str) -> Result<BacktestReport, TransportError>;

    /// Get the service name.
    fn name(&self) -> &str;
}
