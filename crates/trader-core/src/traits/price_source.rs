//! Price source trait definition.

/// Supplier of the next observed price, one call per tick.
///
/// The simulated monitor uses a random walk; an ingesting source would
/// read from a feed instead. Calls never block.
pub trait PriceSource: Send {
    /// Produce the next price.
    fn next_price(&mut self) -> f64;

    /// Return to the initial state, called whenever a new cycle starts.
    fn reset(&mut self);

    /// Get the source name.
    fn name(&self) -> &str;
}
