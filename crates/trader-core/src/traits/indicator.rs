//! Indicator trait definitions.

/// Trait for technical indicators evaluated over a price window.
///
/// Indicators are recomputed from scratch on every call; no state is
/// carried between windows.
pub trait Indicator: Send + Sync {
    /// Indicator value for the most recent point of `data`.
    ///
    /// # Returns
    /// `None` when `data` holds fewer than [`Indicator::required_points`] values
    fn latest(&self, data: &[f64]) -> Option<f64>;

    /// Get the indicator period.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Minimum number of data points needed to produce a value.
    fn required_points(&self) -> usize {
        self.period()
    }

    /// Check if `available` points are enough.
    fn is_ready(&self, available: usize) -> bool {
        available >= self.required_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastSum {
        period: usize,
    }

    impl Indicator for LastSum {
        fn latest(&self, data: &[f64]) -> Option<f64> {
            if !self.is_ready(data.len()) {
                return None;
            }
            Some(data[data.len() - self.period..].iter().sum())
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_readiness() {
        let indicator = LastSum { period: 3 };

        assert!(!indicator.is_ready(2));
        assert!(indicator.is_ready(3));
        assert_eq!(indicator.latest(&[1.0, 2.0]), None);
        assert_eq!(indicator.latest(&[1.0, 2.0, 3.0, 4.0]), Some(9.0));
    }
}
