//! Snapshot construction from the price window.

use serde::{Deserialize, Serialize};
use trader_core::traits::Indicator;
use trader_core::types::IndicatorSnapshot;

use crate::momentum::{Rsi, DEFAULT_RSI_PERIOD};
use crate::moving_average::{Sma, DEFAULT_MA_PERIOD};

/// Indicator periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorPeriods {
    pub moving_average: usize,
    pub rsi: usize,
}

impl Default for IndicatorPeriods {
    fn default() -> Self {
        Self {
            moving_average: DEFAULT_MA_PERIOD,
            rsi: DEFAULT_RSI_PERIOD,
        }
    }
}

/// Computes the MA/RSI pair for each tick.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    sma: Sma,
    rsi: Rsi,
}

impl IndicatorEngine {
    pub fn new(periods: IndicatorPeriods) -> Self {
        Self {
            sma: Sma::new(periods.moving_average),
            rsi: Rsi::new(periods.rsi),
        }
    }

    /// Build a fresh snapshot for `price` from the current window.
    pub fn snapshot(&self, price: f64, window: &[f64]) -> IndicatorSnapshot {
        IndicatorSnapshot::new(price, self.sma.latest(window), self.rsi.latest(window))
    }

    /// Window length after which both indicators produce values.
    pub fn warmup(&self) -> usize {
        self.sma.required_points().max(self.rsi.required_points())
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(IndicatorPeriods::default())
    }
}
