//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! The gradient grid draws one angle per vertex from this generator. Same
//! seed always produces the same sequence on every platform: the state update
//! is pure integer arithmetic and the float conversion is exact.

use std::f64::consts::TAU;

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed angle in radians in [0, 2π).
    pub fn next_angle(&mut self) -> f64 {
        self.next_range(0.0, TAU)
    }
}
