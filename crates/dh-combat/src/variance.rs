//! Variance rolls: the small random offset on every strike.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of per-strike damage variance in `{-1, 0, +1}`.
///
/// Production combat draws from the session RNG via [`RngVariance`];
/// tests pin the offset with [`FixedVariance`] to make whole encounters
/// deterministic.
pub trait Variance {
    /// Next variance roll.
    fn roll(&mut self) -> i32;
}

/// Variance drawn uniformly from an explicit random source.
pub struct RngVariance<'a> {
    rng: &'a mut StdRng,
}

impl<'a> RngVariance<'a> {
    /// Wrap the session RNG.
    pub fn new(rng: &'a mut StdRng) -> Self {
        Self { rng }
    }
}

impl Variance for RngVariance<'_> {
    fn roll(&mut self) -> i32 {
        self.rng.random_range(-1..=1)
    }
}

/// A constant variance, for deterministic encounters.
pub struct FixedVariance {
    offset: i32,
}

impl FixedVariance {
    /// Always roll `offset`.
    pub fn new(offset: i32) -> Self {
        Self { offset }
    }
}

impl Variance for FixedVariance {
    fn roll(&mut self) -> i32 {
        self.offset
    }
}
