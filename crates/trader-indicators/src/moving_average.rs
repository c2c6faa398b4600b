//! Moving average indicators.

use trader_core::traits::Indicator;

/// Period used by the trading cycle.
pub const DEFAULT_MA_PERIOD: usize = 10;

/// Arithmetic mean of the last `period` values of `data`.
///
/// Returns `None` if `data` holds fewer than `period` values.
pub fn moving_average(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let sum: f64 = data[data.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self::new(DEFAULT_MA_PERIOD)
    }
}

impl Indicator for Sma {
    fn latest(&self, data: &[f64]) -> Option<f64> {
        moving_average(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}
