//! RandomSource port - Injectable randomness.
//!
//! Every random decision in the core (simulated network outcomes, earned
//! point amounts) goes through this trait so tests can script the draws.

/// Source of random draws.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn between(&self, low: u64, high: u64) -> u64;

    /// One Bernoulli trial that succeeds with `probability`.
    fn chance(&self, probability: f64) -> bool {
        self.unit() < probability
    }
}
