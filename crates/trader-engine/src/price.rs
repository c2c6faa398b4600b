//! Simulated price feed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trader_core::traits::PriceSource;

/// Starting price of every simulated cycle.
pub const DEFAULT_INITIAL_PRICE: f64 = 150.0;

/// Largest move per tick in either direction.
pub const DEFAULT_MAX_STEP: f64 = 2.5;

/// Random walk: each tick moves the price by `uniform(-max_step, max_step)`.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    initial: f64,
    current: f64,
    max_step: f64,
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(initial: f64, max_step: f64) -> Self {
        assert!(max_step > 0.0, "Max step must be greater than 0");
        Self {
            initial,
            current: initial,
            max_step,
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Make the walk reproducible; `reset` replays the same path.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_PRICE, DEFAULT_MAX_STEP)
    }
}

impl PriceSource for RandomWalk {
    fn next_price(&mut self) -> f64 {
        self.current += self.rng.gen_range(-self.max_step..self.max_step);
        self.current
    }

    fn reset(&mut self) {
        self.current = self.initial;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn name(&self) -> &str {
        "random-walk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_bounded() {
        let mut walk = RandomWalk::default().with_seed(5);
        let mut previous = walk.current();
        for _ in 0..1_000 {
            let price = walk.next_price();
            assert!((price - previous).abs() <= DEFAULT_MAX_STEP);
            previous = price;
        }
    }

    #[test]
    fn test_reset_replays_seeded_path() {
        let mut walk = RandomWalk::default().with_seed(9);
        let first: Vec<f64> = (0..5).map(|_| walk.next_price()).collect();

        walk.reset();
        assert_eq!(walk.current(), DEFAULT_INITIAL_PRICE);
        let second: Vec<f64> = (0..5).map(|_| walk.next_price()).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "Max step must be greater than 0")]
    fn test_zero_step_rejected() {
        RandomWalk::new(150.0, 0.0);
    }
}
