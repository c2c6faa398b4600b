//! Momentum indicators.

use trader_core::traits::Indicator;

/// Period used by the trading cycle.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Relative Strength Index over the last `period + 1` values of `data`.
///
/// Gains and losses are plain averages over `period` differences (no
/// Wilder smoothing). Returns `None` if `data` holds fewer than
/// `period + 1` values, and 100 when there were no losses.
pub fn rsi(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period + 1 {
        return None;
    }

    let recent = &data[data.len() - (period + 1)..];
    let (gains, losses) = recent
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold((0.0, 0.0), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses - change)
            }
        });

    let period_f64 = period as f64;
    let avg_gain = gains / period_f64;
    let avg_loss = losses / period_f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for Rsi {
    fn latest(&self, data: &[f64]) -> Option<f64> {
        rsi(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn required_points(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_rsi_under_filled() {
        let data: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        for len in 0..=data.len() {
            assert_eq!(rsi(&data[..len], 14), None);
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let data: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&data, 14), Some(100.0));
    }

    #[test]
    fn test_rsi_flat_prices() {
        // No losses at all, so the no-division branch applies.
        let data = vec![100.0; 20];
        assert_eq!(rsi(&data, 14), Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let data: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let value = rsi(&data, 14).unwrap();
        assert!(value.abs() < 1e-10);
    }

    #[test]
    fn test_rsi_balanced_moves() {
        // Alternating +1 / -1 over 14 differences: equal gains and losses.
        let data: Vec<f64> = (0..15)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let value = rsi(&data, 14).unwrap();
        assert!((value - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_known_value() {
        // Diffs: +2, -1, +2, -1 -> gains 4, losses 2 over period 4.
        // avg_gain 1.0, avg_loss 0.5, RS 2 -> RSI 100 - 100/3.
        let data = vec![10.0, 12.0, 11.0, 13.0, 12.0];
        let value = rsi(&data, 4).unwrap();
        assert!((value - (100.0 - 100.0 / 3.0)).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_only_uses_last_window() {
        let mut data = vec![500.0, 1.0, 900.0];
        data.extend((0..15).map(|i| 100.0 + i as f64));
        assert_eq!(rsi(&data, 14), Some(100.0));
    }

    #[test]
    fn test_rsi_bounded_on_random_walks() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let len = rng.gen_range(15..120);
            let mut price = 150.0;
            let data: Vec<f64> = (0..len)
                .map(|_| {
                    price += rng.gen_range(-2.5..2.5);
                    price
                })
                .collect();

            let value = rsi(&data, 14).unwrap();
            assert!((0.0..=100.0).contains(&value), "rsi out of range: {}", value);
        }
    }

    #[test]
    fn test_rsi_required_points() {
        let indicator = Rsi::default();
        assert_eq!(indicator.period(), 14);
        assert_eq!(indicator.required_points(), 15);
        assert!(!indicator.is_ready(14));
        assert!(indicator.is_ready(15));
    }
}
