//! Bounded price window.

use std::collections::VecDeque;
use std::ops::Deref;

/// Number of prices the trading cycle keeps.
pub const WINDOW_CAPACITY: usize = 100;

/// Ordered sequence of observed prices with FIFO eviction.
///
/// Insertion is always at the tail; once the window is full the oldest
/// price is dropped before the new one is kept.
#[derive(Debug, Clone)]
pub struct PriceWindow {
    prices: VecDeque<f64>,
    capacity: usize,
}

impl PriceWindow {
    /// Create an empty window with the standard capacity.
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_CAPACITY)
    }

    /// Create an empty window holding at most `capacity` prices.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            prices: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a price, evicting from the head until the window fits.
    pub fn append(&mut self, price: f64) -> WindowView<'_> {
        self.prices.push_back(price);
        while self.prices.len() > self.capacity {
            self.prices.pop_front();
        }
        WindowView {
            prices: self.prices.make_contiguous(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.prices.clear();
    }
}

impl Default for PriceWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the window as it stood after one append.
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a> {
    prices: &'a [f64],
}

impl<'a> WindowView<'a> {
    pub fn as_slice(&self) -> &'a [f64] {
        self.prices
    }
}

impl Deref for WindowView<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(window: &PriceWindow) -> Vec<f64> {
        window.prices.iter().copied().collect()
    }

    #[test]
    fn test_append_under_capacity() {
        let mut window = PriceWindow::with_capacity(3);
        window.append(1.0);
        let view = window.append(2.0);

        assert_eq!(view.as_slice(), &[1.0, 2.0]);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_append_evicts_oldest() {
        let mut window = PriceWindow::with_capacity(3);
        for p in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.append(p);
        }

        assert_eq!(contents(&window), vec![3.0, 4.0, 5.0]);
        assert_eq!(window.len(), window.capacity());
    }

    #[test]
    fn test_full_window_drops_exactly_head() {
        let mut window = PriceWindow::new();
        for i in 0..WINDOW_CAPACITY {
            window.append(100.0 + i as f64);
        }
        let before = contents(&window);
        assert_eq!(before.len(), WINDOW_CAPACITY);

        let view = window.append(999.0);
        let mut expected = before[1..].to_vec();
        expected.push(999.0);

        assert_eq!(view.len(), WINDOW_CAPACITY);
        assert_eq!(view.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_long_run_stays_bounded() {
        let mut window = PriceWindow::new();
        for i in 0..1_000 {
            let view = window.append(i as f64);
            assert!(view.len() <= WINDOW_CAPACITY);
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert_eq!(contents(&window)[0], 900.0);
    }

    #[test]
    fn test_clear() {
        let mut window = PriceWindow::new();
        window.append(1.0);
        window.clear();
        assert!(window.is_empty());
    }

    #[test]
    #[should_panic(expected = "Capacity must be greater than 0")]
    fn test_zero_capacity_rejected() {
        PriceWindow::with_capacity(0);
    }
}
