//! Backtest request flow, independent of the trading cycle.

use std::sync::Arc;
use tokio::sync::watch;
use trader_core::error::BacktestError;
use trader_core::traits::BacktestService;
use trader_core::types::{BacktestLog, BacktestReport};
use tracing::{info, warn};

/// Published backtest progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BacktestState {
    pub in_progress: bool,
    pub report: Option<BacktestReport>,
    pub log: BacktestLog,
}

/// Runs one backtest at a time and keeps a bounded log of what happened.
pub struct BacktestRunner {
    service: Arc<dyn BacktestService>,
    updates: watch::Sender<BacktestState>,
}

impl BacktestRunner {
    pub fn new(service: Arc<dyn BacktestService>, log_capacity: usize) -> Self {
        let (updates, _) = watch::channel(BacktestState {
            in_progress: false,
            report: None,
            log: BacktestLog::new(log_capacity),
        });
        Self { service, updates }
    }

    pub fn subscribe(&self) -> watch::Receiver<BacktestState> {
        self.updates.subscribe()
    }

    pub fn current(&self) -> BacktestState {
        self.updates.borrow().clone()
    }

    /// Request a backtest for `ticker`.
    ///
    /// Service failures are written to the log and returned; they never
    /// affect a running trading cycle.
    pub async fn run(&self, ticker: &str) -> Result<BacktestReport, BacktestError> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(BacktestError::InvalidTicker(ticker));
        }

        let claimed = self.updates.send_if_modified(|state| {
            if state.in_progress {
                return false;
            }
            state.in_progress = true;
            state.report = None;
            state.log.clear();
            state
                .log
                .push(format!("Requesting backtest for {}...", ticker));
            true
        });
        if !claimed {
            return Err(BacktestError::InProgress);
        }

        info!(ticker = %ticker, service = self.service.name(), "backtest requested");
        let result = self.service.backtest(&ticker).await;

        self.updates.send_modify(|state| {
            state.in_progress = false;
            match &result {
                Ok(report) => {
                    state.log.push("Received backtest result from backend.");
                    state.report = Some(report.clone());
                }
                Err(err) => state.log.push(format!("Backtest request failed: {}", err)),
            }
        });

        match result {
            Ok(report) => {
                info!(
                    ticker = %ticker,
                    recommendation = %report.recommendation,
                    confidence = report.confidence,
                    "backtest finished"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(ticker = %ticker, error = %err, "backtest failed");
                Err(err.into())
            }
        }
    }
}
