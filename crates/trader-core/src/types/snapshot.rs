//! Indicator snapshots.

use serde::{Deserialize, Serialize};

/// Moving average reported to the decision service while the window is under-filled.
pub const MA_SENTINEL: f64 = 0.0;

/// RSI reported to the decision service while the window is under-filled.
pub const RSI_SENTINEL: f64 = 50.0;

/// Indicator values derived from the price window on one tick.
///
/// `None` means the window did not yet hold enough prices for that indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub moving_average: Option<f64>,
    pub rsi: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn new(price: f64, moving_average: Option<f64>, rsi: Option<f64>) -> Self {
        Self {
            price,
            moving_average,
            rsi,
        }
    }

    /// Moving average as sent over the wire (`0` when insufficient data).
    pub fn wire_moving_average(&self) -> f64 {
        self.moving_average.unwrap_or(MA_SENTINEL)
    }

    /// RSI as sent over the wire (`50` when insufficient data).
    pub fn wire_rsi(&self) -> f64 {
        self.rsi.unwrap_or(RSI_SENTINEL)
    }

    /// Model input vector `[ma, rsi]`.
    pub fn features(&self) -> [f64; 2] {
        [self.wire_moving_average(), self.wire_rsi()]
    }

    /// True once both indicators carry computed values.
    pub fn is_complete(&self) -> bool {
        self.moving_average.is_some() && self.rsi.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sentinels() {
        let snapshot = IndicatorSnapshot::new(150.0, None, None);
        assert_eq!(snapshot.wire_moving_average(), 0.0);
        assert_eq!(snapshot.wire_rsi(), 50.0);
        assert_eq!(snapshot.features(), [0.0, 50.0]);
        assert!(!snapshot.is_complete());
    }

    #[test]
    fn test_wire_values_pass_through() {
        let snapshot = IndicatorSnapshot::new(151.0, Some(149.5), Some(63.2));
        assert_eq!(snapshot.features(), [149.5, 63.2]);
        assert!(snapshot.is_complete());
    }
}
